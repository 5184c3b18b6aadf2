//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Press the submit control
    Submit,
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Take focus away from the name field
    DismissKeyboard,
    /// Delete the word before the cursor
    DeleteWord,
    /// Clear the name field
    ClearInput,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Submit => "saludar",
            Self::FocusNext => "foco",
            Self::FocusPrev => "anterior",
            Self::DismissKeyboard => "ocultar",
            Self::DeleteWord => "borrar palabra",
            Self::ClearInput => "borrar todo",
            Self::Quit => "salir",
        }
    }

    /// Actions shown in the status bar, in display order
    pub const STATUS_HINTS: &'static [Self] = &[
        Self::Submit,
        Self::FocusNext,
        Self::DismissKeyboard,
        Self::Quit,
    ];
}

/// A key string in the configuration that does not name a key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyBindingError {
    /// The key part is not a known key name or a single character
    #[error("unknown key `{key}` in binding `{binding}`")]
    UnknownKey {
        /// Full binding string
        binding: String,
        /// Offending key part
        key: String,
    },
    /// A modifier prefix is not `Ctrl`, `Alt` or `Shift`
    #[error("unknown modifier `{modifier}` in binding `{binding}`")]
    UnknownModifier {
        /// Full binding string
        binding: String,
        /// Offending modifier part
        modifier: String,
    },
    /// `Shift` on a character key; write the shifted character instead
    #[error("`Shift` cannot combine with character key `{key}` in binding `{binding}`")]
    ShiftedChar {
        /// Full binding string
        binding: String,
        /// Character key part
        key: String,
    },
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Enter".to_string(), Action::Submit);
        bindings.insert("Tab".to_string(), Action::FocusNext);
        bindings.insert("Shift+BackTab".to_string(), Action::FocusPrev);
        bindings.insert("BackTab".to_string(), Action::FocusPrev);
        bindings.insert("Esc".to_string(), Action::DismissKeyboard);
        bindings.insert("Ctrl+w".to_string(), Action::DeleteWord);
        bindings.insert("Ctrl+u".to_string(), Action::ClearInput);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);
        bindings.insert("Ctrl+q".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Check that every key string names a key
    ///
    /// # Errors
    ///
    /// Returns the first binding that does not parse
    pub fn validate(&self) -> Result<(), KeyBindingError> {
        let mut keys: Vec<&String> = self.bindings.keys().collect();
        keys.sort();
        for key in keys {
            parse_key(key)?;
        }
        Ok(())
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action, shortest first
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect();
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        Action::STATUS_HINTS
            .iter()
            .filter_map(|action| {
                let key = self.keys_for_action(*action).into_iter().next()?;
                Some(format!("[{key}] {}", action.description()))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}

/// Parse a key string produced by [`key_to_string`]
///
/// # Errors
///
/// Returns an error if a modifier or the key name is not recognized
pub fn parse_key(binding: &str) -> Result<(KeyCode, KeyModifiers), KeyBindingError> {
    let mut parts: Vec<&str> = binding.split('+').collect();
    // "+" and "Ctrl++" bind the plus key.
    if binding == "+" || binding.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let key = parts.pop().unwrap_or_default();

    let mut modifiers = KeyModifiers::NONE;
    for modifier in parts {
        modifiers |= match modifier {
            "Ctrl" => KeyModifiers::CONTROL,
            "Alt" => KeyModifiers::ALT,
            "Shift" => KeyModifiers::SHIFT,
            _ => {
                return Err(KeyBindingError::UnknownModifier {
                    binding: binding.to_string(),
                    modifier: modifier.to_string(),
                });
            }
        };
    }

    let code = match key {
        "Space" => KeyCode::Char(' '),
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "BackTab" => KeyCode::BackTab,
        "Esc" => KeyCode::Esc,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => match key.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                    Some(n) => KeyCode::F(n),
                    None => {
                        return Err(KeyBindingError::UnknownKey {
                            binding: binding.to_string(),
                            key: key.to_string(),
                        });
                    }
                },
            }
        }
    };

    if modifiers.contains(KeyModifiers::SHIFT) && matches!(code, KeyCode::Char(_)) {
        return Err(KeyBindingError::ShiftedChar {
            binding: binding.to_string(),
            key: key.to_string(),
        });
    }

    Ok((code, modifiers))
}
