//! Template list widget (middle pane)
//!
//! Shows the active category's templates after the filter is applied. The
//! filter line is drawn in the pane title while filter input is live.

use pman_app::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{List, ListItem, Widget},
};

use crate::theme::styles;

pub struct TemplateList<'a> {
    state: &'a AppState,
}

impl<'a> TemplateList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title(&self) -> String {
        let name = self
            .state
            .active_category
            .as_ref()
            .map(|c| c.name().to_string())
            .unwrap_or_else(|| "Templates".to_string());

        if self.state.filter_input {
            format!(" {} /{}_ ", name, self.state.filter)
        } else if !self.state.filter.is_empty() {
            format!(" {} /{} ", name, self.state.filter)
        } else {
            format!(" {} ", name)
        }
    }
}

impl Widget for TemplateList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Templates;
        let title = self.title();
        let block = styles::pane_block(&title, focused);

        let visible = self.state.visible_templates();
        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let selected = self
                    .state
                    .selected
                    .as_ref()
                    .is_some_and(|(_, sel)| sel.as_str() == *name);
                let under_cursor = i == self.state.template_cursor;

                let marker = if selected { "▸ " } else { "  " };
                let style = if under_cursor && focused {
                    styles::focused_selected()
                } else if under_cursor || selected {
                    styles::unfocused_selected()
                } else {
                    styles::text_secondary()
                };
                ListItem::new(format!("{marker}{name}")).style(style)
            })
            .collect();

        let list = if items.is_empty() {
            let placeholder = if self.state.active_category.is_none() {
                "Select a category"
            } else if self.state.filter.is_empty() {
                "No templates"
            } else {
                "No matches"
            };
            List::new([ListItem::new(placeholder).style(styles::text_muted())]).block(block)
        } else {
            List::new(items).block(block)
        };
        list.render(area, buf);
    }
}
