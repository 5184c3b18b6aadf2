//! Capabilities the form asks of the surface it is shown on.

use tracing::debug;

/// Host surface requests issued by the form.
///
/// Requests are fire-and-forget: the form never waits for or inspects their
/// result.
pub trait Host {
    /// Hide the on-screen keyboard, i.e. take input focus away from the field
    fn dismiss_keyboard(&mut self);
}

/// Host for sessions without a screen (the `greet` command)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Headless;

impl Host for Headless {
    fn dismiss_keyboard(&mut self) {
        debug!("Keyboard dismiss requested without a screen");
    }
}
