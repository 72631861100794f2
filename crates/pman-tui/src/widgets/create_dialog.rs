//! New-template dialog overlay

use pman_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

use super::centered_rect;

pub struct CreateDialogWidget<'a> {
    state: &'a AppState,
}

impl<'a> CreateDialogWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for CreateDialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog) = &self.state.creating else {
            return;
        };

        let modal = centered_rect(44, 5, area);
        Clear.render(modal, buf);

        let block = styles::modal_block(" New template ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let input = Line::from(vec![
            Span::styled("Name: ", styles::text_secondary()),
            Span::styled(dialog.input.clone(), styles::text_primary()),
            Span::styled("_", styles::text_secondary()),
        ]);
        let hint = Line::from(Span::styled(
            "Enter: create   Esc: cancel",
            styles::text_muted(),
        ));

        Paragraph::new(vec![input, Line::default(), hint]).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pman_app::CreateDialog;

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
    fn test_renders_entered_name() {
        let mut state = AppState::new();
        state.creating = Some(CreateDialog {
            input: "formal".to_string(),
        });

        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        CreateDialogWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("New template"));
        assert!(text.contains("Name: formal"));
    }

    #[test]
    fn test_renders_nothing_when_closed() {
        let state = AppState::new();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        CreateDialogWidget::new(&state).render(area, &mut buf);
        assert!(buffer_text(&buf).trim().is_empty());
    }
}
