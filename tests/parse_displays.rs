mod common;

use common::{BrokenRunner, LAPTOP_AND_MONITOR, RecordingRunner};
use display_select::{Commands, DisplayRecord, DisplaySet, Mode, OutputState, query_displays};

#[test]
fn test_parse_single_primary_display() {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = "eDP-1 connected primary 1920x1080+0+0 ...\n   1920x1080     60.00*+\n   1600x900      60.00\nHDMI-1 disconnected\n";
    let display_set = DisplaySet::parse(report);
    println!("Parsed displays:\n{}", display_set);

    assert_eq!(display_set.len(), 1, "HDMI-1 is disconnected and must be skipped");
    assert_eq!(
        display_set.get(0),
        Some(&DisplayRecord {
            name: "eDP-1".to_string(),
            connected: true,
            current: true,
            resolutions: vec![Mode::new("1920x1080"), Mode::new("1600x900")],
        })
    );
    assert_eq!(display_set.primary(), Some("eDP-1"));
}

#[test]
fn test_parse_empty_report() {
    let display_set = DisplaySet::parse("");

    assert!(display_set.is_empty());
    assert_eq!(display_set.primary(), None);
}

#[test]
fn test_parse_full_report() {
    let display_set = DisplaySet::parse(LAPTOP_AND_MONITOR);

    let names: Vec<_> = display_set.displays().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["eDP-1", "DP-1"]);

    let external = display_set.get(1).expect("DP-1 should be parsed");
    assert!(!external.current);
    assert_eq!(external.resolutions, [Mode::new("2560x1440"), Mode::new("1920x1080")]);

    let laptop = display_set.get(0).expect("eDP-1 should be parsed");
    assert_eq!(laptop.resolutions.len(), 3, "modes stop at the next header");
}

#[test]
fn test_at_most_one_current_display() {
    let reports = [
        "",
        LAPTOP_AND_MONITOR,
        "DP-1 connected\n   800x600 60.00\nDP-2 connected\n   640x480 60.00\n",
        "A connected primary\nB connected primary\n   800x600\n",
    ];

    for report in reports {
        let display_set = DisplaySet::parse(report);
        let current = display_set.displays().filter(|d| d.current).count();
        assert!(current <= 1, "{} current displays in {:?}", current, report);
    }
}

#[test]
fn test_summary_line_is_not_a_header() {
    let display_set = DisplaySet::parse(
        "Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384\n",
    );
    assert!(display_set.is_empty());
}

#[test]
fn test_lines_before_first_header_are_ignored() {
    let display_set = DisplaySet::parse("   1024x768 60.00\nVGA-1 connected\n   800x600 60.00\n");

    assert_eq!(display_set.len(), 1);
    assert_eq!(display_set.get(0).unwrap().resolutions, [Mode::new("800x600")]);
}

#[test]
fn test_display_without_modes() {
    let display_set = DisplaySet::parse("VIRTUAL-1 connected\nHDMI-1 disconnected\n");

    let display = display_set.get(0).expect("VIRTUAL-1 should be parsed");
    assert_eq!(display.name, "VIRTUAL-1");
    assert!(!display.has_resolutions());
    assert_eq!(display_set.primary(), None);
}

#[test]
fn test_short_header_lines_do_not_panic() {
    assert!(DisplaySet::parse("eDP-1\n").is_empty());

    let display_set = DisplaySet::parse("eDP-1 connected\n\n   \n   1280x720\n");

    let display = display_set.get(0).expect("eDP-1 should be parsed");
    assert!(!display.current);
    assert_eq!(display.resolutions, [Mode::new("1280x720")]);
}

#[test]
fn test_mode_line_keeps_first_token() {
    assert_eq!(Mode::from_line("   1920x1080     60.00*+  59.97"), Some(Mode::new("1920x1080")));
    assert_eq!(Mode::from_line("   \t "), None);
}

#[test]
fn test_output_state_parsing() {
    assert_eq!("connected".parse::<OutputState>(), Ok(OutputState::Connected));
    assert_eq!("disconnected".parse::<OutputState>(), Ok(OutputState::Disconnected));
    assert!("Connected".parse::<OutputState>().is_err());
}

#[test]
fn test_query_runs_xrandr() {
    let runner = RecordingRunner::with_report(LAPTOP_AND_MONITOR);

    let display_set = query_displays(&runner, &Commands::default());

    assert_eq!(display_set.len(), 2);
    assert_eq!(
        runner.captured.borrow().iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["xrandr -q"]
    );
}

#[test]
fn test_failed_query_means_no_displays() {
    let _ = env_logger::builder().is_test(true).try_init();

    let display_set = query_displays(&BrokenRunner, &Commands::default());

    assert!(display_set.is_empty());
    assert_eq!(display_set.primary(), None);
}

#[test]
fn test_unknown_connection_output_ends_block() {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = "\
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis)
   1920x1080     60.00*+
VIRTUAL1 unknown connection (normal left inverted right x axis y axis)
   1024x768      60.00
DP-1 connected (normal left inverted right x axis y axis)
   2560x1440     59.95 +
";
    let display_set = DisplaySet::parse(report);
    println!("Parsed displays:\n{}", display_set);

    let names: Vec<_> = display_set.displays().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["eDP-1", "DP-1"], "VIRTUAL1 has no usable state");
    assert_eq!(
        display_set.get(0).unwrap().resolutions,
        [Mode::new("1920x1080")],
        "VIRTUAL1 and its modes must not leak into eDP-1"
    );
    assert_eq!(display_set.get(1).unwrap().resolutions, [Mode::new("2560x1440")]);
}

#[test]
fn test_unindented_lines_are_not_modes() {
    let display_set = DisplaySet::parse("HDMI-1 connected\n   1280x720 60.00\n1024x768 60.00\n");

    assert_eq!(display_set.get(0).unwrap().resolutions, [Mode::new("1280x720")]);
}
