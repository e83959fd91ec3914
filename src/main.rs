//! The terminal interface for display-select
//!
//! Runs straight into the display list; use the `--help` flag to see the optional settings.
use std::fs::File;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use display_select::{
    CommandRunner, Commands, DryRunRunner, SystemRunner,
    app::{App, Exit, with_terminal},
    query_displays,
    theme::Theme,
};
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "display-select",
    about = "Pick a display and resolution, then apply it with xrandr and bspc."
)]
struct Opts {
    /// Output debug info to the log file
    #[structopt(short, long)]
    verbose: bool,
    /// Where to write the log; the terminal itself is taken by the interface
    #[structopt(long, parse(from_os_str), default_value = "/tmp/display-select.log")]
    log_file: PathBuf,
    /// Log the commands that would change the displays instead of running them
    #[structopt(short = "n", long)]
    dry_run: bool,
    /// Program used to query and configure outputs
    #[structopt(long, default_value = "xrandr")]
    xrandr: String,
    /// Program used to move desktops between monitors
    #[structopt(long, default_value = "bspc")]
    bspc: String,
}

/// Entry point for `display-select`.
fn main() {
    let opts = Opts::from_args();

    if let Err(err) = run(opts) {
        eprintln!("display-select: {:#}", err);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<()> {
    color_eyre::install()?;
    init_logging(&opts);
    log::debug!("Parsed Opts:\n{:#?}", opts);

    let commands = Commands::new(opts.xrandr, opts.bspc);
    let exit = if opts.dry_run {
        session(DryRunRunner(SystemRunner), commands)?
    } else {
        session(SystemRunner, commands)?
    };

    if let Some(summary) = exit.summary(opts.dry_run) {
        println!("{}", summary);
    }
    Ok(())
}

fn session(runner: impl CommandRunner, commands: Commands) -> Result<Exit> {
    let display_set = query_displays(&runner, &commands);
    log::debug!("Discovered displays:\n{}", display_set);

    let mut app = App::new(display_set, runner, commands, Theme::default());

    with_terminal(ratatui::try_init, ratatui::restore, |terminal| app.run(terminal))
        .wrap_err("Terminal interface failed")
}

/// Sends log records to `--log-file`. Logging is switched off if the file cannot be created.
fn init_logging(opts: &Opts) {
    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    let file = match File::create(&opts.log_file) {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init();
}
