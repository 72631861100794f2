//! Category list widget (left pane)

use pman_app::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

use crate::theme::styles;

pub struct CategoryList<'a> {
    state: &'a AppState,
}

impl<'a> CategoryList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for CategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Categories;
        let block = styles::pane_block(" Categories ", focused);

        let items: Vec<ListItem> = self
            .state
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let active = self.state.active_category.as_ref() == Some(category);
                let under_cursor = i == self.state.category_cursor;

                let marker = if active { "● " } else { "  " };
                let style = if under_cursor && focused {
                    styles::focused_selected()
                } else if under_cursor || active {
                    styles::unfocused_selected()
                } else {
                    styles::text_secondary()
                };

                let mut line = vec![Span::raw(marker), Span::raw(category.name().to_string())];
                if category.is_protected() {
                    line.push(Span::styled("  (read-only)", styles::text_muted()));
                }
                ListItem::new(Line::from(line)).style(style)
            })
            .collect();

        let list = if items.is_empty() && !self.state.categories_loaded {
            List::new([ListItem::new("Loading...")]).block(block)
        } else {
            List::new(items).block(block)
        };
        list.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pman_core::Category;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_categories_with_protected_marker() {
        let mut state = AppState::new();
        state.categories = vec![Category::from("System"), Category::from("Translate")];
        state.categories_loaded = true;

        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("System"));
        assert!(text.contains("(read-only)"));
        assert!(text.contains("Translate"));
    }

    #[test]
    fn test_shows_loading_before_first_fetch() {
        let state = AppState::new();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&state).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Loading..."));
    }
}
