//! Editor pane widget (right pane)
//!
//! Renders the selection's buffer. In edit mode a block cursor is drawn at
//! the buffer cursor; scrolling keeps the cursor line in view.

use pman_app::{AppState, EditorPhase, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct EditorPane<'a> {
    state: &'a AppState,
}

impl<'a> EditorPane<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title(&self) -> String {
        let Some((category, name)) = &self.state.selected else {
            return " Editor ".to_string();
        };
        let mut title = format!(" {category}/{name}");
        if self.state.dirty {
            title.push_str(" *");
        }
        match self.state.editor {
            EditorPhase::Editing => title.push_str(" [edit]"),
            EditorPhase::Saving => title.push_str(" [saving]"),
            _ if category.is_protected() => title.push_str(" [read-only]"),
            _ => {}
        }
        title.push(' ');
        title
    }

    /// First visible line given the cursor position and the inner height
    fn scroll_offset(&self, inner_height: u16) -> u16 {
        let (line, _) = self.state.cursor_position();
        let height = inner_height.max(1) as usize;
        line.saturating_sub(height - 1) as u16
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Editor;
        let title = self.title();
        let block = styles::pane_block(&title, focused);
        let inner = block.inner(area);

        if self.state.selected.is_none() {
            let placeholder = if self.state.is_loading() {
                "Loading..."
            } else {
                "Select a template to view it"
            };
            Paragraph::new(placeholder)
                .style(styles::text_muted())
                .block(block)
                .render(area, buf);
            return;
        }

        let scroll = self.scroll_offset(inner.height);
        Paragraph::new(self.state.edit_buffer.as_str())
            .style(styles::text_primary())
            .scroll((scroll, 0))
            .block(block)
            .render(area, buf);

        // Block cursor while editing
        if self.state.editor == EditorPhase::Editing {
            let (line, col) = self.state.cursor_position();
            let y = inner.y + (line as u16).saturating_sub(scroll);
            let x = inner.x + col as u16;
            if y < inner.y + inner.height && x < inner.x + inner.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        ratatui::style::Style::default()
                            .fg(palette::CONTRAST_FG)
                            .bg(palette::ACCENT),
                    );
                }
            }
        }
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
    fn test_placeholder_without_selection() {
        let state = AppState::new();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&state).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Select a template"));
    }

    #[test]
    fn test_title_shows_dirty_and_mode() {
        let mut state = AppState::new();
        state.install_buffer(
            Category::from("Translate"),
            "base.txt".to_string(),
            "Hello".to_string(),
        );
        state.editor = EditorPhase::Editing;
        state.dirty = true;

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Translate/base.txt *"));
        assert!(text.contains("[edit]"));
        assert!(text.contains("Hello"));
    }

    #[test]
    fn test_read_only_marker_for_protected_selection() {
        let mut state = AppState::new();
        state.install_buffer(
            Category::from("System"),
            "base_system.txt".to_string(),
            "prompt".to_string(),
        );

        let area = Rect::new(0, 0, 44, 6);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&state).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("[read-only]"));
    }
}
