//! Helpers shared by the integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;

use display_select::{CommandError, CommandRunner, Invocation};

/// A typical `xrandr -q` report: laptop panel is primary, one external monitor connected
pub const LAPTOP_AND_MONITOR: &str = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 193mm
   1920x1080     60.00*+  59.97    59.96    48.00
   1680x1050     59.95    59.88
   1600x900      59.99    59.94    59.95    59.82
HDMI-1 disconnected (normal left inverted right x axis y axis)
DP-1 connected (normal left inverted right x axis y axis)
   2560x1440     59.95 +
   1920x1080     60.00    50.00    59.94
DP-2 disconnected (normal left inverted right x axis y axis)
";

/// Records every invocation and answers queries with a canned report
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub report: String,
    /// Programs whose `run` calls fail
    pub failing: HashSet<String>,
    pub captured: RefCell<Vec<Invocation>>,
    pub ran: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn with_report(report: &str) -> Self {
        Self {
            report: report.to_string(),
            ..Self::default()
        }
    }

    pub fn ran_lines(&self) -> Vec<String> {
        self.ran.borrow().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn capture(&self, invocation: &Invocation) -> Result<String, CommandError> {
        self.captured.borrow_mut().push(invocation.clone());
        Ok(self.report.clone())
    }

    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        self.ran.borrow_mut().push(invocation.clone());
        if self.failing.contains(&invocation.program) {
            return Err(CommandError::Failed {
                invocation: invocation.to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

/// A runner whose commands cannot even be started
#[derive(Debug, Default)]
pub struct BrokenRunner;

impl CommandRunner for BrokenRunner {
    fn capture(&self, invocation: &Invocation) -> Result<String, CommandError> {
        Err(CommandError::Spawn(
            invocation.to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        ))
    }

    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        Err(CommandError::Spawn(
            invocation.to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        ))
    }
}
