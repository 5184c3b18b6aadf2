//! Application state

use crate::config::{Action, Config};
use crate::form::{GreetingForm, InputState, SubmitOutcome};
use crate::host::Host;
use tracing::{debug, info};

/// Which control receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The name field (keyboard open, cursor shown)
    Input,
    /// The submit control
    Submit,
    /// Nothing (keyboard dismissed)
    None,
}

impl Host for Focus {
    fn dismiss_keyboard(&mut self) {
        if *self == Self::Input {
            *self = Self::None;
        }
    }
}

/// One screen session: the form plus terminal-side state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// The greeting form
    pub form: GreetingForm,

    /// Control that currently has focus
    pub focus: Focus,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new session with an empty form and the name field focused
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            form: GreetingForm::new(),
            focus: Focus::Input,
            should_quit: false,
        }
    }

    /// Run a bound action
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Submit => {
                self.press_submit();
            }
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::DismissKeyboard => self.dismiss_keyboard(),
            Action::DeleteWord => self.delete_word(),
            Action::ClearInput => self.clear_input(),
            Action::Quit => self.quit(),
        }
    }

    /// Type a character into the name field, focusing it first
    pub fn type_char(&mut self, c: char) {
        self.focus = Focus::Input;
        self.form.edit(|input| input.insert_char(c));
    }

    /// Paste text into the name field; whatever exceeds the cap is dropped
    pub fn paste(&mut self, text: &str) {
        self.focus = Focus::Input;
        self.form.edit(|input| input.insert_str(text));
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.focus == Focus::Input {
            self.form.edit(InputState::backspace);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.focus == Focus::Input {
            self.form.edit(InputState::delete);
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) {
        if self.focus == Focus::Input {
            self.form.edit(InputState::delete_word);
        }
    }

    /// Empty the name field
    pub fn clear_input(&mut self) {
        if self.focus == Focus::Input {
            self.form.edit(InputState::clear);
        }
    }

    /// Move the cursor one character left
    pub fn cursor_left(&mut self) {
        self.move_cursor(InputState::cursor_left);
    }

    /// Move the cursor one character right
    pub fn cursor_right(&mut self) {
        self.move_cursor(InputState::cursor_right);
    }

    /// Move the cursor to the start of the name
    pub fn cursor_home(&mut self) {
        self.move_cursor(InputState::cursor_home);
    }

    /// Move the cursor to the end of the name
    pub fn cursor_end(&mut self) {
        self.move_cursor(InputState::cursor_end);
    }

    /// Activate the submit control; rejected while it is disabled
    pub fn press_submit(&mut self) -> Option<SubmitOutcome> {
        self.form.press_submit(&mut self.focus)
    }

    /// Take focus away from the name field
    pub fn dismiss_keyboard(&mut self) {
        self.focus.dismiss_keyboard();
    }

    /// Focus the name field
    pub const fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// Cycle focus forward between the field and the submit control
    pub const fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Submit,
            Focus::Submit | Focus::None => Focus::Input,
        };
    }

    /// Cycle focus backward between the field and the submit control
    pub const fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Submit => Focus::Input,
            Focus::Input | Focus::None => Focus::Submit,
        };
    }

    /// Request exit from the main loop
    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    fn move_cursor(&mut self, movement: impl FnOnce(&mut InputState)) {
        if self.focus == Focus::Input {
            self.form.edit(|input| {
                movement(input);
                false
            });
        }
    }
}
