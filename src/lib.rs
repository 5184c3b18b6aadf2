//! Saludador - a one-screen greeting form for the terminal
//!
//! Type a name, press the button, get a greeting. Blank names are refused
//! with a validation message, and names are capped at
//! [`form::MAX_LENGTH`] characters.

pub mod app;
pub mod config;
pub mod form;
pub mod host;
pub mod paths;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use form::{GreetingForm, Phase, SubmitOutcome};
