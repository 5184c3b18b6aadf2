//! TUI rendering
//!
//! Everything drawn here is a pure function of [`App`]:
//! - `colors`: Color palette definitions
//! - `layout`: Screen geometry, also used for mouse hit-testing

pub mod colors;
pub mod layout;

pub use layout::{FormLayout, rect_contains};

use crate::app::{App, Focus};
use crate::form::{ResultMessage, text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BACKGROUND)),
        area,
    );

    let layout = FormLayout::new(area);
    render_header(frame, &layout);
    render_input(frame, app, &layout);
    render_submit(frame, app, &layout);
    render_result(frame, app, layout.result);
    render_status_bar(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame<'_>, layout: &FormLayout) {
    let title = Paragraph::new(Span::styled(
        text::TITLE,
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let subtitle = Paragraph::new(Span::styled(
        text::SUBTITLE,
        Style::default().fg(colors::TEXT_DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, layout.subtitle);

    let label = Paragraph::new(Span::styled(
        format!(" {}", text::LABEL),
        Style::default()
            .fg(colors::TEXT_LABEL)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, layout.label);
}

fn render_input(frame: &mut Frame<'_>, app: &App, layout: &FormLayout) {
    let input = app.form.input();
    let focused = app.focus == Focus::Input;

    let (border_color, background) = if app.form.error_visible() {
        (colors::INPUT_ERROR_BORDER, colors::INPUT_ERROR_BG)
    } else if focused {
        (colors::BORDER_FOCUSED, colors::SURFACE)
    } else {
        (colors::BORDER, colors::SURFACE)
    };

    let content = if input.text().is_empty() {
        Span::styled(text::PLACEHOLDER, Style::default().fg(colors::PLACEHOLDER))
    } else {
        Span::styled(input.text(), Style::default().fg(colors::TEXT_PRIMARY))
    };

    let text_area = layout.input_text();
    let before_cursor = u16::try_from(Span::raw(&input.text()[..input.cursor()]).width())
        .unwrap_or(u16::MAX);
    let scroll = if focused {
        horizontal_scroll(before_cursor, text_area.width)
    } else {
        0
    };

    let field = Paragraph::new(Line::from(content))
        .scroll((0, scroll))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(background)),
        );
    frame.render_widget(field, layout.input);

    let counter = Paragraph::new(Span::styled(
        format!("{} ", app.form.counter()),
        Style::default().fg(colors::TEXT_MUTED),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(counter, layout.counter);

    if focused {
        let x = text_area
            .x
            .saturating_add(before_cursor - scroll)
            .min(text_area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, text_area.y));
    }
}

/// Columns to scroll so the cursor stays inside a field `width` columns wide
const fn horizontal_scroll(before_cursor: u16, width: u16) -> u16 {
    if width > 0 && before_cursor >= width {
        before_cursor - width + 1
    } else {
        0
    }
}

fn render_submit(frame: &mut Frame<'_>, app: &App, layout: &FormLayout) {
    let button = app.form.submit_button();
    let focused = app.focus == Focus::Submit;

    let background = if button.disabled {
        colors::BUTTON_DISABLED
    } else if focused {
        colors::BUTTON_FOCUSED
    } else {
        colors::BUTTON
    };
    let (border_type, border_color) = if focused {
        (BorderType::Thick, colors::BUTTON_FOCUSED)
    } else {
        (BorderType::Rounded, background)
    };

    let control = Paragraph::new(Span::styled(
        button.label,
        Style::default()
            .fg(colors::TEXT_ON_ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(background)),
    );
    frame.render_widget(control, layout.button);
}

fn render_result(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(message) = app.form.result_message() else {
        return;
    };

    let style = match message {
        ResultMessage::Error => Style::default().fg(colors::ERROR),
        ResultMessage::Greeting(_) => Style::default()
            .fg(colors::GREETING)
            .add_modifier(Modifier::BOLD),
    };
    let paragraph =
        Paragraph::new(Line::from(Span::styled(message.text(), style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = app.config.keys.status_hints();
    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {hints} "),
        Style::default().fg(colors::TEXT_DIM),
    )))
    .style(Style::default().bg(colors::STATUS_BAR));

    let focus_label = match app.focus {
        Focus::Input => "Teclado → nombre",
        Focus::Submit => "Teclado → botón",
        Focus::None => "Teclado oculto",
    };
    let focus_width = u16::try_from(focus_label.chars().count().saturating_add(2))
        .unwrap_or(0)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(focus_width)])
        .split(area);

    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        format!(" {focus_label} "),
        Style::default().fg(colors::TEXT_PRIMARY),
    )))
    .style(Style::default().bg(colors::STATUS_BAR))
    .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}
