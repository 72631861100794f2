//! Screen layout definitions for the TUI
//!
//! Three panes side by side (categories, templates, editor) above a
//! one-line status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Category list (left column)
    pub categories: Rect,

    /// Template list for the active category (middle column)
    pub templates: Rect,

    /// Editor pane showing the selected template (remaining width)
    pub editor: Rect,

    /// One-line status bar along the bottom
    pub status: Rect,
}

/// Width of the category column
const CATEGORIES_WIDTH: u16 = 22;

/// Width of the template column
const TEMPLATES_WIDTH: u16 = 30;

/// Split the screen into the three panes and the status bar
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Min(3),    // Panes
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(CATEGORIES_WIDTH),
        Constraint::Length(TEMPLATES_WIDTH),
        Constraint::Min(20),
    ])
    .split(rows[0]);

    ScreenAreas {
        categories: columns[0],
        templates: columns[1],
        editor: columns[2],
        status: rows[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_column_widths() {
        let areas = create(Rect::new(0, 0, 120, 40));

        assert_eq!(areas.categories.width, CATEGORIES_WIDTH);
        assert_eq!(areas.templates.width, TEMPLATES_WIDTH);
        assert_eq!(
            areas.editor.width,
            120 - CATEGORIES_WIDTH - TEMPLATES_WIDTH
        );
    }

    #[test]
    fn test_status_bar_is_one_row_at_bottom() {
        let areas = create(Rect::new(0, 0, 120, 40));

        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 39);
        assert_eq!(areas.categories.height, 39);
    }

    #[test]
    fn test_panes_cover_full_width() {
        let areas = create(Rect::new(0, 0, 100, 30));
        assert_eq!(
            areas.categories.width + areas.templates.width + areas.editor.width,
            100
        );
    }
}
