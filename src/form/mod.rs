//! The greeting form: a name field, a submit control and a result line.
//!
//! All state lives in [`GreetingForm`]. Everything the screen shows (submit
//! label, disabled flag, which message is visible) is derived from it on
//! demand, so rendering is a pure function of the form.

mod input;
pub mod text;

pub use input::InputState;

use crate::host::Host;
use tracing::{debug, trace};

/// Maximum length of the name, in characters
pub const MAX_LENGTH: usize = 20;

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No message shown (initial state, and after any edit)
    Idle,
    /// The last submit was on a blank name
    ErrorShown,
    /// The last submit produced a greeting
    Greeted,
}

/// Which branch a submit took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank name: the error is now visible
    Rejected,
    /// The greeting is now visible
    Greeted,
}

/// The single message in the result area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMessage<'a> {
    /// Validation error text
    Error,
    /// Greeting text
    Greeting(&'a str),
}

impl ResultMessage<'_> {
    /// Text to display
    #[must_use]
    pub const fn text(&self) -> &str {
        match self {
            Self::Error => text::ERROR_MESSAGE,
            Self::Greeting(greeting) => *greeting,
        }
    }
}

/// Derived presentation of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    /// Whether activation is rejected
    pub disabled: bool,
    /// Label shown on the control
    pub label: &'static str,
}

/// Name field plus the derived greeting and error flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingForm {
    input: InputState,
    greeting: String,
    error_visible: bool,
}

impl Default for GreetingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingForm {
    /// A fresh form: empty name, nothing shown
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: InputState::new(MAX_LENGTH),
            greeting: String::new(),
            error_visible: false,
        }
    }

    /// The name field
    #[must_use]
    pub const fn input(&self) -> &InputState {
        &self.input
    }

    /// Current name, untrimmed
    #[must_use]
    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Greeting from the last successful submit, or `""`
    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Whether the validation error is showing
    #[must_use]
    pub const fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// The field's text changed to `new_text`.
    ///
    /// The field applies its length cap; any visible greeting or error is
    /// cleared.
    pub fn on_input_change(&mut self, new_text: &str) {
        self.input.set(new_text);
        self.clear_result();
    }

    /// Apply an editing operation to the field.
    ///
    /// `edit` returns whether it changed the text. A change clears any
    /// visible greeting or error, the same as [`Self::on_input_change`];
    /// cursor-only moves leave the result alone.
    pub fn edit(&mut self, edit: impl FnOnce(&mut InputState) -> bool) -> bool {
        let changed = edit(&mut self.input);
        if changed {
            trace!(len = self.input.char_count(), "Name edited");
            self.clear_result();
        }
        changed
    }

    /// Validate the name and show either the greeting or the error.
    ///
    /// Always asks the host to dismiss the keyboard. This runs regardless of
    /// the submit control's disabled state; use [`Self::press_submit`] for
    /// activations of the control.
    pub fn submit(&mut self, host: &mut impl Host) -> SubmitOutcome {
        let outcome = if self.input.is_blank() {
            self.error_visible = true;
            self.greeting.clear();
            SubmitOutcome::Rejected
        } else {
            self.error_visible = false;
            self.greeting = text::greeting(self.input.text());
            SubmitOutcome::Greeted
        };
        debug!(?outcome, "Form submitted");
        host.dismiss_keyboard();
        outcome
    }

    /// Activate the submit control.
    ///
    /// Returns `None` without touching any state while the control is
    /// disabled.
    pub fn press_submit(&mut self, host: &mut impl Host) -> Option<SubmitOutcome> {
        if self.is_submit_disabled() {
            debug!("Submit pressed while disabled; ignoring");
            return None;
        }
        Some(self.submit(host))
    }

    /// Whether the submit control rejects activation (blank name)
    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        self.input.is_blank()
    }

    /// Label and interactive state of the submit control
    #[must_use]
    pub fn submit_button(&self) -> SubmitButton {
        let disabled = self.is_submit_disabled();
        SubmitButton {
            disabled,
            label: if disabled {
                text::SUBMIT_DISABLED
            } else {
                text::SUBMIT_ENABLED
            },
        }
    }

    /// The message to show in the result area, if any
    #[must_use]
    pub fn result_message(&self) -> Option<ResultMessage<'_>> {
        if self.error_visible {
            Some(ResultMessage::Error)
        } else if self.greeting.is_empty() {
            None
        } else {
            Some(ResultMessage::Greeting(&self.greeting))
        }
    }

    /// Current phase of the submit cycle
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.error_visible {
            Phase::ErrorShown
        } else if self.greeting.is_empty() {
            Phase::Idle
        } else {
            Phase::Greeted
        }
    }

    /// Character counter text, e.g. `"3/20"`
    #[must_use]
    pub fn counter(&self) -> String {
        text::counter(self.input.char_count(), self.input.max_chars())
    }

    fn clear_result(&mut self) {
        self.greeting.clear();
        self.error_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Host that counts dismiss requests
    #[derive(Debug, Default)]
    struct RecordingHost {
        dismissals: usize,
    }

    impl Host for RecordingHost {
        fn dismiss_keyboard(&mut self) {
            self.dismissals += 1;
        }
    }

    fn form_with(text: &str) -> GreetingForm {
        let mut form = GreetingForm::new();
        form.on_input_change(text);
        form
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = GreetingForm::new();
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.text(), "");
        assert_eq!(form.greeting(), "");
        assert!(!form.error_visible());
        assert_eq!(form.result_message(), None);
        assert_eq!(form.counter(), "0/20");
    }

    #[test]
    fn test_submit_greets_with_untrimmed_name() {
        let mut host = RecordingHost::default();
        let mut form = form_with(" Ana ");

        assert_eq!(form.submit(&mut host), SubmitOutcome::Greeted);
        assert_eq!(form.greeting(), "👋 Hola,  Ana !");
        assert!(!form.error_visible());
        assert_eq!(form.phase(), Phase::Greeted);
        assert_eq!(host.dismissals, 1);
    }

    #[test]
    fn test_submit_blank_shows_error() {
        let mut host = RecordingHost::default();
        let mut form = form_with("   ");

        assert_eq!(form.submit(&mut host), SubmitOutcome::Rejected);
        assert!(form.error_visible());
        assert_eq!(form.greeting(), "");
        assert_eq!(form.result_message(), Some(ResultMessage::Error));
        assert_eq!(host.dismissals, 1);
    }

    #[test]
    fn test_submit_blank_after_greeting_clears_greeting() {
        let mut host = RecordingHost::default();
        let mut form = form_with("Ana");
        form.submit(&mut host);

        // Replace the text without going through an edit, then force a submit.
        form.input.set("  ");
        form.submit(&mut host);

        assert_eq!(form.phase(), Phase::ErrorShown);
        assert_eq!(form.greeting(), "");
    }

    #[test]
    fn test_press_submit_disabled_does_nothing() {
        let mut host = RecordingHost::default();
        let mut form = GreetingForm::new();

        assert_eq!(form.press_submit(&mut host), None);
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(host.dismissals, 0);
    }

    #[test]
    fn test_press_submit_enabled_runs_submit() {
        let mut host = RecordingHost::default();
        let mut form = form_with("Ana");

        assert_eq!(form.press_submit(&mut host), Some(SubmitOutcome::Greeted));
        assert_eq!(
            form.result_message(),
            Some(ResultMessage::Greeting("👋 Hola, Ana!"))
        );
    }

    #[test]
    fn test_submit_button_labels() {
        let button = GreetingForm::new().submit_button();
        assert!(button.disabled);
        assert_eq!(button.label, "Escribe un nombre");

        let button = form_with("Ana").submit_button();
        assert!(!button.disabled);
        assert_eq!(button.label, "Saludar");
    }

    #[test]
    fn test_edit_clears_result() {
        let mut host = RecordingHost::default();
        let mut form = form_with("Ana");
        form.submit(&mut host);

        assert!(form.edit(|input| input.insert_char('s')));
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.text(), "Anas");
    }

    #[test]
    fn test_cursor_move_keeps_result() {
        let mut host = RecordingHost::default();
        let mut form = form_with("Ana");
        form.submit(&mut host);

        assert!(!form.edit(|input| {
            input.cursor_left();
            false
        }));
        assert_eq!(form.phase(), Phase::Greeted);
    }

    #[test]
    fn test_rejected_edit_at_cap_keeps_result() {
        let mut host = RecordingHost::default();
        let mut form = form_with("abcdefghijklmnopqrst");
        form.submit(&mut host);

        assert!(!form.edit(|input| input.insert_char('u')));
        assert_eq!(form.phase(), Phase::Greeted);
    }

    #[test]
    fn test_state_machine_cycle() {
        let mut host = RecordingHost::default();
        let mut form = GreetingForm::new();

        form.submit(&mut host);
        assert_eq!(form.phase(), Phase::ErrorShown);

        form.on_input_change("A");
        assert_eq!(form.phase(), Phase::Idle);

        form.submit(&mut host);
        assert_eq!(form.phase(), Phase::Greeted);

        form.on_input_change("");
        assert_eq!(form.phase(), Phase::Idle);

        form.submit(&mut host);
        assert_eq!(form.phase(), Phase::ErrorShown);
    }

    fn blank_name() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\u{3000}')], 0..=20)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn any_edit() -> impl Strategy<Value = u8> {
        0_u8..5
    }

    proptest! {
        #[test]
        fn prop_blank_submit_shows_error(name in blank_name()) {
            let mut host = RecordingHost::default();
            let mut form = form_with(&name);
            prop_assert!(form.is_submit_disabled());

            prop_assert_eq!(form.submit(&mut host), SubmitOutcome::Rejected);
            prop_assert!(form.error_visible());
            prop_assert_eq!(form.greeting(), "");
        }

        #[test]
        fn prop_named_submit_greets(name in "[ ]{0,3}[A-Za-zñá]{1,10}[ ]{0,3}") {
            let mut host = RecordingHost::default();
            let mut form = form_with(&name);
            prop_assert!(!form.is_submit_disabled());

            prop_assert_eq!(form.submit(&mut host), SubmitOutcome::Greeted);
            prop_assert!(!form.error_visible());
            prop_assert_eq!(form.greeting(), format!("👋 Hola, {name}!"));
        }

        #[test]
        fn prop_disabled_iff_blank(name in "\\PC{0,20}") {
            let form = form_with(&name);
            prop_assert_eq!(form.is_submit_disabled(), name.trim().is_empty());
        }

        #[test]
        fn prop_edit_always_clears(
            name in "\\PC{0,20}",
            next in "[a-z ]{0,25}",
            edit in any_edit(),
        ) {
            let mut host = RecordingHost::default();
            let mut form = form_with(&name);
            form.submit(&mut host);

            form.on_input_change(&next);
            prop_assert_eq!(form.phase(), Phase::Idle);
            prop_assert_eq!(form.result_message(), None);

            form.submit(&mut host);
            let changed = form.edit(|input| match edit {
                0 => input.backspace(),
                1 => input.delete_word(),
                2 => input.clear(),
                3 => input.insert_str("x"),
                _ => input.insert_char('y'),
            });
            if changed {
                prop_assert_eq!(form.phase(), Phase::Idle);
            }
        }

        #[test]
        fn prop_never_exceeds_cap(
            name in "\\PC{0,40}",
            typed in proptest::collection::vec(any::<char>(), 0..40),
        ) {
            let mut form = form_with(&name);
            prop_assert!(form.input().char_count() <= MAX_LENGTH);
            for c in typed {
                form.edit(|input| input.insert_char(c));
                prop_assert!(form.input().char_count() <= MAX_LENGTH);
            }
        }

        #[test]
        fn prop_messages_mutually_exclusive(
            steps in proptest::collection::vec(prop_oneof![Just(None), "[ a]{0,3}".prop_map(Some)], 0..12),
        ) {
            let mut host = RecordingHost::default();
            let mut form = GreetingForm::new();
            for step in steps {
                match step {
                    Some(text) => form.on_input_change(&text),
                    None => {
                        form.press_submit(&mut host);
                    }
                }
                prop_assert!(!(form.error_visible() && !form.greeting().is_empty()));
            }
        }
    }
}
