//! Keyboard and mouse routing
//!
//! Keys go to a configured binding first, except that plain characters typed
//! into the focused name field always edit it.

use crate::app::{App, Focus};
use crate::tui::render::{FormLayout, rect_contains};
use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

/// Handle a key press
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let plain_char = match code {
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    };

    if let Some(c) = plain_char
        && app.focus == Focus::Input
    {
        app.type_char(c);
        return;
    }

    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        app.handle_action(action);
        return;
    }

    match (code, plain_char) {
        (_, Some(' ')) if app.focus == Focus::Submit => {
            app.press_submit();
        }
        (_, Some(c)) => app.type_char(c),
        (KeyCode::Backspace, _) => app.backspace(),
        (KeyCode::Delete, _) => app.delete(),
        (KeyCode::Left, _) => app.cursor_left(),
        (KeyCode::Right, _) => app.cursor_right(),
        (KeyCode::Home, _) => app.cursor_home(),
        (KeyCode::End, _) => app.cursor_end(),
        _ => trace!(?code, ?modifiers, "Unhandled key"),
    }
}

/// Handle a mouse event.
///
/// Only left clicks matter: on the field to focus it, on the submit control to
/// press it, anywhere else to dismiss the keyboard.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let layout = FormLayout::new(frame_area);
    let (x, y) = (mouse.column, mouse.row);
    if rect_contains(layout.input, x, y) {
        app.focus_input();
    } else if rect_contains(layout.button, x, y) {
        app.press_submit();
    } else {
        app.dismiss_keyboard();
    }
}
