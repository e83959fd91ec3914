//! Execution of external programs.
//!
//! Everything that leaves the process goes through a [`CommandRunner`], so the rest of the crate
//! only ever builds [`Invocation`]s.
use core::fmt;
use std::process::Command;

use thiserror::Error;

/// Error type for running external commands
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to start `{0}`")]
    Spawn(String, #[source] std::io::Error),
    #[error("`{invocation}` exited with {status}")]
    Failed { invocation: String, status: String },
}

type Result<T = ()> = std::result::Result<T, CommandError>;

/// A program together with its argument list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the selection flow
pub trait CommandRunner {
    /// Runs the command to completion and returns stdout followed by stderr
    fn capture(&self, invocation: &Invocation) -> Result<String>;

    /// Runs the command to completion, discarding its output
    fn run(&self, invocation: &Invocation) -> Result;
}

/// Spawns real processes via `std::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn output(invocation: &Invocation) -> Result<std::process::Output> {
        Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| CommandError::Spawn(invocation.to_string(), e))
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, invocation: &Invocation) -> Result<String> {
        log::debug!("Capturing `{}`", invocation);
        let output = Self::output(invocation)?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    fn run(&self, invocation: &Invocation) -> Result {
        log::info!("Running `{}`", invocation);
        let output = Self::output(invocation)?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            log::debug!("`{}` stderr: {}", invocation.program, stderr.trim());
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                invocation: invocation.to_string(),
                status: output.status.to_string(),
            })
        }
    }
}

/// Captures with the wrapped runner but only logs commands that would change state
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner<R = SystemRunner>(pub R);

impl<R: CommandRunner> CommandRunner for DryRunRunner<R> {
    fn capture(&self, invocation: &Invocation) -> Result<String> {
        self.0.capture(invocation)
    }

    fn run(&self, invocation: &Invocation) -> Result {
        log::info!("Dry run, skipping `{}`", invocation);
        Ok(())
    }
}
