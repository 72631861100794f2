//! Main render/view function (View in TEA pattern)

use pman_app::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::CategoryList::new(state), areas.categories);
    frame.render_widget(widgets::TemplateList::new(state), areas.templates);
    frame.render_widget(widgets::EditorPane::new(state), areas.editor);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modal overlay last so it sits on top
    if state.creating.is_some() {
        frame.render_widget(widgets::CreateDialogWidget::new(state), area);
    }
}
