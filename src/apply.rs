use core::fmt;

use crate::{
    command::{CommandRunner, Invocation},
    commands::Commands,
    types::Mode,
};

/// Outcome of [`apply_mode`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ApplyStatus {
    ChangedResolution,
    ChangedResolutionAndMovedDesktop,
}

impl fmt::Display for ApplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyStatus::ChangedResolution => write!(f, "Changed resolution"),
            ApplyStatus::ChangedResolutionAndMovedDesktop => {
                write!(f, "Changed resolution and moved desktop")
            }
        }
    }
}

/// Switches `display` to `mode`, makes it primary and, when it was not primary before, moves the
/// desktop over from `previous_primary` and turns that output off.
///
/// Commands run in order and failures are only logged: a failing step never stops the next one.
/// The mode change always comes first so the old output is not turned off while it is still the
/// only primary.
pub fn apply_mode(
    runner: &impl CommandRunner,
    commands: &Commands,
    display: &str,
    mode: &Mode,
    previous_primary: Option<&str>,
) -> ApplyStatus {
    log::info!(
        "Applying {} on {} (primary was {})",
        mode,
        display,
        previous_primary.unwrap_or("none")
    );

    run_logged(runner, &commands.set_mode(display, mode));

    match previous_primary {
        Some(previous) if previous != display => {
            run_logged(runner, &commands.power_off(previous));
            run_logged(runner, &commands.relocate_desktop(previous, display));
            ApplyStatus::ChangedResolutionAndMovedDesktop
        }
        _ => {
            run_logged(runner, &commands.refresh());
            ApplyStatus::ChangedResolution
        }
    }
}

fn run_logged(runner: &impl CommandRunner, invocation: &Invocation) {
    if let Err(err) = runner.run(invocation) {
        log::warn!("{}", err);
    }
}
