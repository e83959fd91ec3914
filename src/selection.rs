//! The two-level display/resolution selection state machine.
//!
//! [`Selection`] knows nothing about terminals or processes: it consumes [`Input`]s and reports
//! a [`Transition`]. Issuing the apply commands is left to the caller.
use crate::{display::DisplaySet, types::Mode};

/// Which list is currently shown
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    /// Picking an output
    Display,
    /// Picking a mode for the display at index `display`
    Resolution { display: usize, index: usize },
}

/// Abstract user input, decoupled from concrete key bindings
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Input {
    Up,
    Down,
    Confirm,
    Back,
    Quit,
}

/// The display and mode the user settled on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    pub display: String,
    pub mode: Mode,
    /// Primary output recorded when the session started
    pub previous_primary: Option<String>,
}

/// Result of feeding one [`Input`] to a [`Selection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    None,
    /// The highlighted index changed
    Moved,
    /// Entered the mode list of the highlighted display
    Descended,
    /// Returned to the display list
    Ascended,
    /// The highlighted display has no modes to choose from
    NoModes(String),
    /// A mode was confirmed; the session is over
    Apply(ApplyRequest),
    /// The user quit; the session is over
    Quit,
}

impl Transition {
    /// Whether the session should end after this transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, Transition::Apply(_) | Transition::Quit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    level: Level,
    /// Highlighted display; kept while the mode list is open
    display_index: usize,
    primary: Option<String>,
}

impl Selection {
    pub fn new(primary: Option<String>) -> Self {
        Self {
            level: Level::Display,
            display_index: 0,
            primary,
        }
    }

    /// Starts a selection with the primary of `displays`
    pub fn for_displays(displays: &DisplaySet) -> Self {
        Self::new(displays.primary().map(str::to_string))
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Highlighted index in the active list
    pub fn index(&self) -> usize {
        match self.level {
            Level::Display => self.display_index,
            Level::Resolution { index, .. } => index,
        }
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn handle(&mut self, input: Input, displays: &DisplaySet) -> Transition {
        match input {
            Input::Quit => Transition::Quit,
            Input::Up => self.step(false, displays),
            Input::Down => self.step(true, displays),
            Input::Confirm => self.confirm(displays),
            Input::Back => match self.level {
                Level::Resolution { .. } => {
                    self.level = Level::Display;
                    Transition::Ascended
                }
                Level::Display => Transition::None,
            },
        }
    }

    fn step(&mut self, down: bool, displays: &DisplaySet) -> Transition {
        let (index, count) = match &mut self.level {
            Level::Display => (&mut self.display_index, displays.len()),
            Level::Resolution { display, index } => {
                let count = displays
                    .get(*display)
                    .map_or(0, |record| record.resolutions.len());
                (index, count)
            }
        };

        let next = if down {
            (*index + 1).min(count.saturating_sub(1))
        } else {
            index.saturating_sub(1)
        };

        if next == *index {
            Transition::None
        } else {
            *index = next;
            Transition::Moved
        }
    }

    fn confirm(&mut self, displays: &DisplaySet) -> Transition {
        match self.level {
            Level::Display => {
                let Some(record) = displays.get(self.display_index) else {
                    return Transition::None;
                };
                if !record.has_resolutions() {
                    return Transition::NoModes(record.name.clone());
                }
                self.level = Level::Resolution {
                    display: self.display_index,
                    index: 0,
                };
                Transition::Descended
            }
            Level::Resolution { display, index } => {
                let Some(record) = displays.get(display) else {
                    return Transition::None;
                };
                let Some(mode) = record.resolutions.get(index) else {
                    return Transition::None;
                };
                Transition::Apply(ApplyRequest {
                    display: record.name.clone(),
                    mode: mode.clone(),
                    previous_primary: self.primary.clone(),
                })
            }
        }
    }
}
