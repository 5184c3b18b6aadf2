//! User-visible strings

/// Screen title
pub const TITLE: &str = "Saludador Expo";
/// Line under the title
pub const SUBTITLE: &str = "Tu primer formulario en TypeScript";
/// Label above the name field
pub const LABEL: &str = "Ingresa tu nombre:";
/// Shown in the empty name field
pub const PLACEHOLDER: &str = "Ej. Ana Perez";
/// Submit label while the control is disabled
pub const SUBMIT_DISABLED: &str = "Escribe un nombre";
/// Submit label while the control is enabled
pub const SUBMIT_ENABLED: &str = "Saludar";
/// Validation error for a blank name
pub const ERROR_MESSAGE: &str = "⚠️ Por favor, introduce un nombre válido.";

/// Greeting for `name`, used verbatim (not trimmed)
#[must_use]
pub fn greeting(name: &str) -> String {
    format!("👋 Hola, {name}!")
}

/// Character counter shown under the field
#[must_use]
pub fn counter(current: usize, max: usize) -> String {
    format!("{current}/{max}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_greeting_keeps_name_verbatim() {
        assert_eq!(greeting("Ana"), "👋 Hola, Ana!");
        assert_eq!(greeting("  Ana "), "👋 Hola,   Ana !");
    }

    #[test]
    fn test_counter() {
        assert_eq!(counter(0, 20), "0/20");
        assert_eq!(counter(20, 20), "20/20");
    }
}
