//! Custom widget components

mod category_list;
mod create_dialog;
mod editor_pane;
mod status_bar;
mod template_list;

pub use category_list::CategoryList;
pub use create_dialog::CreateDialogWidget;
pub use editor_pane::EditorPane;
pub use status_bar::StatusBar;
pub use template_list::TemplateList;

use ratatui::layout::Rect;

/// Center a fixed-size rect within an area, clamped to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let result = centered_rect(40, 12, area);
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }
}
