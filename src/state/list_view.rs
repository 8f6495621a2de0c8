// Models list view state.
// Tab filtering, multi-row selection, cursor movement, and mouse hit-testing.

use std::collections::HashSet;

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::widgets::TableState;

use crate::models::AnalyticModel;

use super::collab::{Confirm, ListNavigator, Notifier};
use super::loading::LoadingState;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this model?";
pub const DELETE_SUCCESS: &str = "Model deleted successfully";

/// Width of the row highlight symbol column.
pub const HIGHLIGHT_WIDTH: u16 = 2;
pub const COLUMN_SPACING: u16 = 1;

/// Column widths of the models table: checkbox, six data columns, delete.
pub fn column_widths() -> [Constraint; 8] {
    [
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Fill(4),
        Constraint::Length(11),
        Constraint::Length(3),
    ]
}

/// Which set of records is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelTab {
    #[default]
    New,
    Archived,
}

impl ModelTab {
    pub const ALL: [ModelTab; 2] = [ModelTab::New, ModelTab::Archived];

    pub fn title(&self) -> &'static str {
        match self {
            ModelTab::New => "New",
            ModelTab::Archived => "Archived",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ModelTab::New => ModelTab::Archived,
            ModelTab::Archived => ModelTab::New,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs, so both directions land on the other one.
        self.next()
    }

    /// Whether a record belongs on this tab.
    pub fn matches(&self, model: &AnalyticModel) -> bool {
        match self {
            ModelTab::New => !model.archived,
            ModelTab::Archived => model.archived,
        }
    }
}

/// What a mouse click on the table landed on. Exactly one target per click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    SelectAll,
    Checkbox(u64),
    Delete(u64),
    Open(u64),
}

/// State of the models list screen.
#[derive(Debug)]
pub struct ListViewState {
    pub records: LoadingState<Vec<AnalyticModel>>,
    pub active_tab: ModelTab,
    pub selected: HashSet<u64>,
    pub table_state: TableState,
    /// Area the table was last rendered into (header row included).
    pub table_area: Option<Rect>,
    keep_selection_across_tabs: bool,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ListViewState {
    pub fn new(keep_selection_across_tabs: bool) -> Self {
        Self {
            records: LoadingState::Idle,
            active_tab: ModelTab::default(),
            selected: HashSet::new(),
            table_state: TableState::default(),
            table_area: None,
            keep_selection_across_tabs,
        }
    }

    /// Records shown on the active tab, in source order.
    pub fn displayed(&self) -> Vec<&AnalyticModel> {
        self.records
            .data()
            .map(|records| {
                records
                    .iter()
                    .filter(|r| self.active_tab.matches(r))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn displayed_ids(&self) -> HashSet<u64> {
        self.displayed().iter().map(|r| r.id).collect()
    }

    /// Number of records on the given tab.
    pub fn count(&self, tab: ModelTab) -> usize {
        self.records
            .data()
            .map(|records| records.iter().filter(|r| tab.matches(r)).count())
            .unwrap_or(0)
    }

    pub fn set_loading(&mut self) {
        self.records = LoadingState::Loading;
    }

    pub fn set_error(&mut self, error: String) {
        self.records = LoadingState::Error(error);
        self.table_state.select(None);
    }

    pub fn set_loaded(&mut self, records: Vec<AnalyticModel>) {
        self.records = LoadingState::Loaded(records);
        if !self.keep_selection_across_tabs {
            self.prune_selection();
        }
        self.reset_cursor();
    }

    /// Switch tabs. Unless configured otherwise, selections that are no longer
    /// displayed are dropped.
    pub fn set_tab(&mut self, tab: ModelTab) {
        if tab == self.active_tab {
            return;
        }
        tracing::debug!(from = ?self.active_tab, to = ?tab, "switch tab");
        self.active_tab = tab;
        if !self.keep_selection_across_tabs {
            self.prune_selection();
        }
        self.reset_cursor();
    }

    fn prune_selection(&mut self) {
        let ids = self.displayed_ids();
        self.selected.retain(|id| ids.contains(id));
    }

    /// Toggle one record in the selection set.
    pub fn handle_select_row(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Clear the selection when everything is selected, otherwise replace it
    /// with exactly the displayed records.
    pub fn handle_select_all(&mut self) {
        let ids = self.displayed_ids();
        if self.selected.len() == ids.len() {
            self.selected.clear();
        } else {
            self.selected = ids;
        }
    }

    /// Header checkbox state: every displayed record is selected.
    pub fn all_selected(&self) -> bool {
        let displayed = self.displayed();
        !displayed.is_empty() && displayed.iter().all(|r| self.selected.contains(&r.id))
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// Open a record for editing.
    pub fn open_row(&self, id: u64, nav: &mut dyn ListNavigator) {
        tracing::debug!(id, "open model");
        nav.on_edit(id);
    }

    /// Ask for confirmation and report a successful delete. Records are not
    /// removed; the source is read-only. Returns whether the user confirmed.
    pub fn handle_delete(
        &self,
        id: u64,
        confirm: &mut dyn Confirm,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "delete declined");
            return false;
        }
        tracing::info!(id, "delete confirmed");
        notifier.success(DELETE_SUCCESS);
        true
    }

    /// Move the cursor down, stopping at the last row.
    pub fn select_next(&mut self) {
        let len = self.displayed().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Move the cursor up, stopping at the first row.
    pub fn select_prev(&mut self) {
        if self.displayed().is_empty() {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(i));
    }

    fn reset_cursor(&mut self) {
        let selected = if self.displayed().is_empty() {
            None
        } else {
            Some(0)
        };
        self.table_state = TableState::default().with_selected(selected);
    }

    /// Identifier of the record under the cursor.
    pub fn cursor_id(&self) -> Option<u64> {
        let index = self.table_state.selected()?;
        self.displayed().get(index).map(|r| r.id)
    }

    /// Resolve a click position against the last rendered table.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<RowTarget> {
        let area = self.table_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }

        let cols_area = Rect {
            x: area.x + HIGHLIGHT_WIDTH,
            width: area.width.saturating_sub(HIGHLIGHT_WIDTH),
            ..area
        };
        let cols = Layout::horizontal(column_widths())
            .flex(Flex::Start)
            .spacing(COLUMN_SPACING)
            .split(cols_area);
        let in_col = |rect: Rect| column >= rect.x && column < rect.x + rect.width;
        let on_checkbox = in_col(cols[0]);
        let on_delete = in_col(cols[cols.len() - 1]);

        // Header row
        if row == area.y {
            return on_checkbox.then_some(RowTarget::SelectAll);
        }

        let index = self.table_state.offset() + (row - area.y - 1) as usize;
        let id = self.displayed().get(index)?.id;
        let target = if on_checkbox {
            RowTarget::Checkbox(id)
        } else if on_delete {
            RowTarget::Delete(id)
        } else {
            RowTarget::Open(id)
        };
        Some(target)
    }
}
