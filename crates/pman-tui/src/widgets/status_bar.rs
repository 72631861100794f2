//! Status bar widget
//!
//! One line: the latest notice (colored by severity) on the left, busy and
//! key hints on the right.

use pman_app::{AppState, EditorPhase};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn notice_span(&self) -> Span<'_> {
        match self.state.latest_notice() {
            Some(notice) if notice.is_error() => {
                Span::styled(notice.message.as_str(), styles::status_error())
            }
            Some(notice) => Span::styled(notice.message.as_str(), styles::status_info()),
            None => Span::styled("Ready", styles::text_muted()),
        }
    }

    fn busy_span(&self) -> Option<Span<'static>> {
        if self.state.is_saving {
            Some(Span::styled("saving...", styles::status_busy()))
        } else if self.state.is_loading() {
            Some(Span::styled("loading...", styles::status_busy()))
        } else {
            None
        }
    }

    fn hints(&self) -> &'static str {
        if self.state.creating.is_some() {
            "Enter create  Esc cancel"
        } else if self.state.editor == EditorPhase::Editing {
            "^S save  Esc done"
        } else {
            "Tab focus  Enter open  e edit  n new  / filter  a apply  q quit"
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" "), self.notice_span()];
        if let Some(busy) = self.busy_span() {
            spans.push(Span::raw("  "));
            spans.push(busy);
        }

        let hints = self.hints();
        let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = (area.width as usize)
            .saturating_sub(left_width + hints.chars().count() + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(hints, styles::text_muted()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
