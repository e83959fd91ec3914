use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};

use crate::{
    apply::{ApplyStatus, apply_mode},
    command::CommandRunner,
    commands::Commands,
    display::DisplaySet,
    selection::{Input, Selection, Transition},
    theme::Theme,
    view::{self, ViewModel},
};

/// Maps a key press to an [`Input`]; unbound keys map to `None`
pub fn input_for_key(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Confirm),
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            Some(Input::Back)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// How the interactive session ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Applied(ApplyStatus),
}

impl Exit {
    /// Line to print once the terminal is restored; `dry_run` means no command really ran
    pub fn summary(&self, dry_run: bool) -> Option<String> {
        match self {
            Exit::Quit => None,
            Exit::Applied(_) if dry_run => {
                Some("Dry run, no display settings changed".to_string())
            }
            Exit::Applied(status) => Some(status.to_string()),
        }
    }
}

/// Sets up a terminal with `init`, hands it to `body` and calls `restore` afterwards.
///
/// `restore` also runs when `init` fails, since it may have switched on raw mode before the
/// error.
pub fn with_terminal<B: Backend, T>(
    init: impl FnOnce() -> io::Result<Terminal<B>>,
    restore: impl FnOnce(),
    body: impl FnOnce(&mut Terminal<B>) -> io::Result<T>,
) -> io::Result<T> {
    let result = init().and_then(|mut terminal| body(&mut terminal));
    restore();
    result
}

pub struct App<R> {
    displays: DisplaySet,
    selection: Selection,
    runner: R,
    commands: Commands,
    theme: Theme,
    status: Option<String>,
    exit: Option<Exit>,
}

impl<R: CommandRunner> App<R> {
    pub fn new(displays: DisplaySet, runner: R, commands: Commands, theme: Theme) -> Self {
        let selection = Selection::for_displays(&displays);
        Self {
            displays,
            selection,
            runner,
            commands,
            theme,
            status: None,
            exit: None,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Set once the session is over
    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::build(&self.displays, &self.selection, self.status())
    }

    /// Feeds one input through the state machine, running the apply commands when a mode is
    /// confirmed
    pub fn handle_input(&mut self, input: Input) {
        if self.exit.is_some() {
            return;
        }

        let transition = self.selection.handle(input, &self.displays);
        log::trace!("{:?} -> {:?}", input, transition);

        match transition {
            Transition::None => {}
            Transition::Moved | Transition::Descended | Transition::Ascended => {
                self.status = None;
            }
            Transition::NoModes(name) => {
                log::info!("{} reports no modes", name);
                self.status = Some(format!("{} reports no modes", name));
            }
            Transition::Apply(request) => {
                let status = apply_mode(
                    &self.runner,
                    &self.commands,
                    &request.display,
                    &request.mode,
                    request.previous_primary.as_deref(),
                );
                log::info!("{}", status);
                self.status = Some(status.to_string());
                self.exit = Some(Exit::Applied(status));
            }
            Transition::Quit => {
                log::debug!("Quit without applying");
                self.exit = Some(Exit::Quit);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(input) = input_for_key(key) {
            self.handle_input(input);
        }
    }

    /// Draws and reads key events until the session ends
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<Exit> {
        loop {
            let view = self.view();
            terminal.draw(|frame| view::draw(frame, &view, &self.theme))?;

            if let Some(exit) = self.exit {
                return Ok(exit);
            }

            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
    }
}
