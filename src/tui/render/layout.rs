//! Screen geometry, shared by rendering and mouse hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Maximum width of the form column
pub const FORM_WIDTH: u16 = 48;

/// Rows used by the form column, top to bottom
const FORM_ROWS: [u16; 8] = [
    1, // title
    2, // subtitle + gap
    1, // label
    3, // input box
    2, // counter + gap
    3, // submit button
    1, // gap
    2, // result
];

/// Where each part of the screen goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// Screen title
    pub title: Rect,
    /// Subtitle
    pub subtitle: Rect,
    /// Field label
    pub label: Rect,
    /// Bordered name field
    pub input: Rect,
    /// Character counter
    pub counter: Rect,
    /// Bordered submit control
    pub button: Rect,
    /// Greeting or error line
    pub result: Rect,
    /// Key hints along the bottom row
    pub status_bar: Rect,
}

impl FormLayout {
    /// Lay out the screen inside `area`
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let status_height = u16::from(area.height > 0);
        let status_bar = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(status_height),
            width: area.width,
            height: status_height,
        };
        let body = Rect {
            height: area.height.saturating_sub(status_height),
            ..area
        };

        let column = centered_column(body);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(FORM_ROWS.map(Constraint::Length))
            .split(column);

        Self {
            title: rows[0],
            subtitle: first_line(rows[1]),
            label: rows[2],
            input: rows[3],
            counter: first_line(rows[4]),
            button: rows[5],
            result: rows[7],
            status_bar,
        }
    }

    /// Area inside the name field's border, where the text goes
    #[must_use]
    pub fn input_text(&self) -> Rect {
        Rect {
            x: self.input.x.saturating_add(2),
            y: self.input.y.saturating_add(1),
            width: self.input.width.saturating_sub(4),
            height: self.input.height.saturating_sub(2).min(1),
        }
    }
}

/// Whether the point lies inside the rectangle
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Centered column of at most `FORM_WIDTH` columns, vertically centered
fn centered_column(area: Rect) -> Rect {
    let height: u16 = FORM_ROWS.iter().sum();
    let width = area.width.min(FORM_WIDTH);
    let height = area.height.min(height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn first_line(area: Rect) -> Rect {
    Rect {
        height: area.height.min(1),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_centered() {
        let layout = FormLayout::new(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.title.x, 16);
        assert_eq!(layout.title.width, FORM_WIDTH);
        // 23 body rows, 15 form rows: 4 rows of padding above.
        assert_eq!(layout.title.y, 4);
        assert_eq!(layout.input, Rect::new(16, 8, 48, 3));
        assert_eq!(layout.button, Rect::new(16, 13, 48, 3));
        assert_eq!(layout.result, Rect::new(16, 17, 48, 2));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_layout_narrow_terminal() {
        let layout = FormLayout::new(Rect::new(0, 0, 30, 24));
        assert_eq!(layout.input.x, 0);
        assert_eq!(layout.input.width, 30);
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_overflow() {
        let area = Rect::new(0, 0, 10, 5);
        let layout = FormLayout::new(area);
        for rect in [layout.title, layout.input, layout.button, layout.result] {
            assert!(rect.bottom() <= area.bottom());
            assert!(rect.right() <= area.right());
        }
    }

    #[test]
    fn test_input_text_area() {
        let layout = FormLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.input_text(), Rect::new(18, 9, 44, 1));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 2, 3, 3);
        assert!(rect_contains(rect, 2, 2));
        assert!(rect_contains(rect, 4, 4));
        assert!(!rect_contains(rect, 5, 4));
        assert!(!rect_contains(rect, 1, 3));
    }
}
