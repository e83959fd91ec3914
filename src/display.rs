use core::fmt;

use crate::{
    command::CommandRunner,
    commands::Commands,
    types::{Mode, OutputState},
};

/// A connected output together with the modes it supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Output name, e.g. `eDP-1`
    pub name: String,
    pub connected: bool,
    /// Whether xrandr reports this output as primary
    pub current: bool,
    /// Modes in the order xrandr lists them
    pub resolutions: Vec<Mode>,
}

impl DisplayRecord {
    pub fn has_resolutions(&self) -> bool {
        !self.resolutions.is_empty()
    }
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Display {{ name: {}, connected: {}, current: {}, modes: {} }}",
            self.name,
            self.connected,
            self.current,
            self.resolutions.len()
        )
    }
}

/// The fields of an output header line: `<name> <state> [primary] ...`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Header<'a> {
    name: &'a str,
    state: OutputState,
    primary: bool,
}

impl<'a> Header<'a> {
    /// Returns `None` for lines that are not output headers
    fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let name = fields.next()?;
        let state = fields.next()?.parse().ok()?;
        let primary = fields.next() == Some("primary");

        Some(Self {
            name,
            state,
            primary,
        })
    }
}

/// The outputs found in one `xrandr -q` report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySet {
    /// Connected outputs only, in report order
    displays: Vec<DisplayRecord>,
    /// Name of the output that was primary when the report was taken
    primary: Option<String>,
}

impl DisplaySet {
    /// Parses the text of an `xrandr -q` report.
    ///
    /// Never fails: text without any output header yields an empty set. Modes are only taken
    /// from indented lines. Any other line ends the current output's block, so lines that are
    /// not output headers (the `Screen 0: ...` summary, `unknown connection` outputs) are
    /// dropped together with their modes, and disconnected outputs only serve as delimiters.
    pub fn parse(report: &str) -> Self {
        let mut displays = Vec::new();
        let mut primary = None;
        let mut block: Option<(Header, Vec<Mode>)> = None;

        for line in report.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                if let Some((_, modes)) = block.as_mut() {
                    modes.extend(Mode::from_line(line));
                }
                continue;
            }

            if let Some((header, modes)) = block.take() {
                Self::emit(header, modes, &mut displays, &mut primary);
            }
            block = Header::parse(line).map(|header| (header, Vec::new()));
            if block.is_none() {
                log::trace!("Skipping line `{}`", line);
            }
        }
        if let Some((header, modes)) = block {
            Self::emit(header, modes, &mut displays, &mut primary);
        }

        Self { displays, primary }
    }

    fn emit(
        header: Header,
        resolutions: Vec<Mode>,
        displays: &mut Vec<DisplayRecord>,
        primary: &mut Option<String>,
    ) {
        let connected = header.state.is_connected();
        // xrandr only ever flags one output; keep the first if a report disagrees
        let current = header.primary && primary.is_none();
        if current {
            *primary = Some(header.name.to_string());
        }

        if connected {
            displays.push(DisplayRecord {
                name: header.name.to_string(),
                connected,
                current,
                resolutions,
            });
        } else {
            log::trace!("Skipping {} output {}", header.state, header.name);
        }
    }

    /// Iterates over the connected displays
    pub fn displays(&self) -> impl ExactSizeIterator<Item = &DisplayRecord> {
        self.displays.iter()
    }

    /// Returns display for the given `index`
    pub fn get(&self, index: usize) -> Option<&DisplayRecord> {
        self.displays.get(index)
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    /// Name of the primary output, if the report named one
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }
}

impl fmt::Display for DisplaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "DisplaySet {{ primary: {}, displays: [",
            self.primary().unwrap_or("none")
        )?;
        for (i, display) in self.displays.iter().enumerate() {
            if i > 0 {
                writeln!(f, ", ")?;
            }
            write!(f, "    {}", display)?;
        }
        write!(f, "\n] }}")
    }
}

/// Runs `xrandr -q` and parses its output.
///
/// A query that cannot be run is logged and treated like an empty report.
pub fn query_displays(runner: &impl CommandRunner, commands: &Commands) -> DisplaySet {
    let invocation = commands.query();
    match runner.capture(&invocation) {
        Ok(report) => DisplaySet::parse(&report),
        Err(err) => {
            log::warn!("Display query failed: {}", err);
            DisplaySet::default()
        }
    }
}
