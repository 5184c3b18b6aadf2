//! Color palette for the TUI
//!
//! Light palette: gray page, white field, blue button.

use ratatui::style::Color;

// UI Chrome
pub const BACKGROUND: Color = Color::Rgb(245, 245, 245);
pub const SURFACE: Color = Color::Rgb(255, 255, 255);
pub const BORDER: Color = Color::Rgb(221, 221, 221);
pub const BORDER_FOCUSED: Color = Color::Rgb(74, 144, 226);
pub const STATUS_BAR: Color = Color::Rgb(230, 230, 235);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(51, 51, 51);
pub const TEXT_LABEL: Color = Color::Rgb(68, 68, 68);
pub const TEXT_DIM: Color = Color::Rgb(102, 102, 102);
pub const TEXT_MUTED: Color = Color::Rgb(136, 136, 136);
pub const PLACEHOLDER: Color = Color::Rgb(153, 153, 153);
pub const TEXT_ON_ACCENT: Color = Color::Rgb(255, 255, 255);

// Submit control
pub const BUTTON: Color = Color::Rgb(74, 144, 226);
pub const BUTTON_DISABLED: Color = Color::Rgb(160, 196, 232);
pub const BUTTON_FOCUSED: Color = Color::Rgb(40, 100, 180);

// Result (semantic)
pub const GREETING: Color = Color::Rgb(46, 204, 113);
pub const ERROR: Color = Color::Rgb(231, 76, 60);
pub const INPUT_ERROR_BORDER: Color = Color::Rgb(255, 77, 77);
pub const INPUT_ERROR_BG: Color = Color::Rgb(255, 240, 240);
