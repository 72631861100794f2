//! Application state (Model in TEA pattern)

use pman_core::{Category, Notice, PipelineConfig};

use crate::config::Settings;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Running,
    Quitting,
}

/// Which pane receives list navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Categories,
    Templates,
    Editor,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Templates,
            Focus::Templates => Focus::Editor,
            Focus::Editor => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::Editor,
            Focus::Templates => Focus::Categories,
            Focus::Editor => Focus::Templates,
        }
    }
}

/// Editing surface phase for the selected template.
///
/// `NoSelection → Loading → Viewing ⇄ Editing → Saving → Viewing`.
/// The create dialog is an overlay (`AppState::creating`), not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    NoSelection,
    Loading,
    Viewing,
    Editing,
    Saving,
}

/// Overlay state for the "new template" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDialog {
    pub input: String,
}

/// The whole application model.
///
/// Catalog state (categories, templates, selection, buffer) is owned here and
/// only mutated by `handler::update`; persistence results arrive as messages.
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: SessionPhase,
    pub settings: Settings,

    // ── Catalog ──────────────────────────────────────────────────────────
    /// Categories are fetched once per session and cached
    pub categories: Vec<Category>,
    pub categories_loaded: bool,
    pub category_cursor: usize,
    pub active_category: Option<Category>,
    pub templates: Vec<String>,
    pub template_cursor: usize,

    // ── Selection and edit buffer ────────────────────────────────────────
    pub selected: Option<(Category, String)>,
    pub edit_buffer: String,
    /// Cursor as a char offset into `edit_buffer`
    pub cursor: usize,
    pub dirty: bool,
    pub editor: EditorPhase,

    // ── Presentation ─────────────────────────────────────────────────────
    pub focus: Focus,
    pub filter: String,
    pub filter_input: bool,
    pub creating: Option<CreateDialog>,
    pub notices: Vec<Notice>,

    // ── In-flight bookkeeping ────────────────────────────────────────────
    /// Guards `save`/`apply` re-entry; the triggering keys are inert while set
    pub is_saving: bool,
    /// Template to auto-select once the next list refresh lands (create flow)
    pub pending_select: Option<String>,
    request_seq: u64,
    /// Token of the template-list request whose response is still wanted
    pub templates_token: u64,
    /// Token of the content request whose response is still wanted
    pub content_token: u64,

    // ── Pipeline configuration ───────────────────────────────────────────
    /// Cached copy of the external configuration; replaced wholesale after a
    /// successful apply
    pub config: PipelineConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == SessionPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = SessionPhase::Quitting;
    }

    /// Issue a fresh request token; responses carrying an older token are stale
    pub fn next_token(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    pub fn is_loading(&self) -> bool {
        self.editor == EditorPhase::Loading
    }

    /// Whether the selected template lives in the protected category
    pub fn selection_read_only(&self) -> bool {
        self.selected
            .as_ref()
            .map(|(category, _)| category.is_protected())
            .unwrap_or(false)
    }

    // ── Template list filtering ──────────────────────────────────────────

    /// Template names after the filter string is applied (case-insensitive)
    pub fn visible_templates(&self) -> Vec<&str> {
        if self.filter.is_empty() {
            return self.templates.iter().map(String::as_str).collect();
        }
        let needle = self.filter.to_lowercase();
        self.templates
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn visible_template_at(&self, index: usize) -> Option<String> {
        self.visible_templates().get(index).map(|s| s.to_string())
    }

    pub fn clamp_template_cursor(&mut self) {
        let len = self.visible_templates().len();
        if len == 0 {
            self.template_cursor = 0;
        } else if self.template_cursor >= len {
            self.template_cursor = len - 1;
        }
    }

    // ── Notices ──────────────────────────────────────────────────────────

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
        let cap = self.settings.ui.notice_history.max(1);
        if self.notices.len() > cap {
            let drain = self.notices.len() - cap;
            self.notices.drain(0..drain);
        }
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.push_notice(Notice::info(message));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.push_notice(Notice::error(message));
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    // ── Edit buffer operations ───────────────────────────────────────────
    // The cursor is a char offset; these translate to byte offsets on use.

    fn byte_index(&self) -> usize {
        self.edit_buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.edit_buffer.len())
    }

    fn char_count(&self) -> usize {
        self.edit_buffer.chars().count()
    }

    pub fn buffer_insert(&mut self, c: char) {
        let at = self.byte_index();
        self.edit_buffer.insert(at, c);
        self.cursor += 1;
        self.dirty = true;
    }

    pub fn buffer_backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.edit_buffer.remove(at);
        self.dirty = true;
    }

    pub fn buffer_delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.edit_buffer.remove(at);
            self.dirty = true;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_line_home(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.line_start(line);
    }

    pub fn cursor_line_end(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.line_start(line) + self.line_len(line);
    }

    pub fn cursor_up(&mut self) {
        let (line, col) = self.cursor_position();
        if line == 0 {
            return;
        }
        let target = line - 1;
        self.cursor = self.line_start(target) + col.min(self.line_len(target));
    }

    pub fn cursor_down(&mut self) {
        let (line, col) = self.cursor_position();
        let last = self.edit_buffer.split('\n').count() - 1;
        if line >= last {
            return;
        }
        let target = line + 1;
        self.cursor = self.line_start(target) + col.min(self.line_len(target));
    }

    /// `(line, column)` of the cursor, both zero-based char counts
    pub fn cursor_position(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.edit_buffer.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Char offset of the first char of the given line
    fn line_start(&self, line: usize) -> usize {
        let mut offset = 0;
        for (i, text) in self.edit_buffer.split('\n').enumerate() {
            if i == line {
                return offset;
            }
            offset += text.chars().count() + 1; // +1 for the newline
        }
        offset
    }

    /// Char length of the given line, excluding the newline
    fn line_len(&self, line: usize) -> usize {
        self.edit_buffer
            .split('\n')
            .nth(line)
            .map(|text| text.chars().count())
            .unwrap_or(0)
    }

    /// Install freshly loaded content as the selection's buffer
    pub fn install_buffer(&mut self, category: Category, name: String, text: String) {
        self.selected = Some((category, name));
        self.edit_buffer = text;
        self.cursor = 0;
        self.dirty = false;
        self.editor = EditorPhase::Viewing;
    }

    /// Drop the selection and its buffer (category switch)
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.edit_buffer.clear();
        self.cursor = 0;
        self.dirty = false;
        self.editor = EditorPhase::NoSelection;
    }
}
