//! List page state

use category_admin_api::Category;
use serde::Serialize;
use serde_json::Number;

use crate::editor::ModeKind;
use crate::schema::CATEGORY_FIELDS;

/// One displayed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    /// Row identity, equal to the server id
    pub key: String,
    pub name: String,
    pub order: Number,
}

impl CategoryRow {
    /// Cell text in column order.
    pub fn cells(&self) -> [String; 2] {
        [self.name.clone(), self.order.to_string()]
    }
}

impl From<Category> for CategoryRow {
    fn from(category: Category) -> Self {
        Self {
            key: category.id,
            name: category.name,
            order: category.order,
        }
    }
}

/// Column headers, taken from the field labels.
pub fn columns() -> impl Iterator<Item = &'static str> {
    CATEGORY_FIELDS.iter().map(|spec| spec.label)
}

/// What the editor panel is doing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorStatus {
    #[default]
    Idle,
    Creating,
    Editing {
        selected: Category,
    },
}

/// Handle for an in-flight list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket(u64);

/// Handle for an in-flight edit fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTicket(u64);

/// Rows plus editor status.
///
/// Fetch results are applied only if their ticket is still current: a list
/// fetch is superseded by any newer list fetch, an edit fetch by any later
/// open or close of the editor. A frontend that starts a second fetch before
/// the first returns drives these methods itself; `RecordListController`
/// serializes its own fetches through `&mut self`.
#[derive(Debug, Default)]
pub struct ListState {
    rows: Vec<CategoryRow>,
    status: EditorStatus,
    list_seq: u64,
    editor_epoch: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Categories (N)`
    pub fn header(&self) -> String {
        format!("Categories ({})", self.rows.len())
    }

    pub fn find_row(&self, key: &str) -> Option<&CategoryRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn status(&self) -> &EditorStatus {
        &self.status
    }

    pub fn is_editor_open(&self) -> bool {
        self.status != EditorStatus::Idle
    }

    pub fn mode(&self) -> Option<ModeKind> {
        match self.status {
            EditorStatus::Idle => None,
            EditorStatus::Creating => Some(ModeKind::Create),
            EditorStatus::Editing { .. } => Some(ModeKind::Edit),
        }
    }

    /// Record selected for editing, if any.
    pub fn selected(&self) -> Option<&Category> {
        match &self.status {
            EditorStatus::Editing { selected } => Some(selected),
            _ => None,
        }
    }

    // ===== List fetches =====

    pub fn begin_list_fetch(&mut self) -> ListTicket {
        self.list_seq += 1;
        ListTicket(self.list_seq)
    }

    pub fn is_current_list(&self, ticket: ListTicket) -> bool {
        ticket.0 == self.list_seq
    }

    /// Replace the rows with a fetch result. Returns `false` and leaves the
    /// rows alone when `ticket` has been superseded.
    pub fn apply_list(&mut self, ticket: ListTicket, records: Vec<Category>) -> bool {
        if !self.is_current_list(ticket) {
            log::debug!(
                "Dropping superseded list result (ticket {}, latest {})",
                ticket.0,
                self.list_seq
            );
            return false;
        }
        self.rows = records.into_iter().map(CategoryRow::from).collect();
        true
    }

    // ===== Editor =====

    pub fn begin_edit_fetch(&mut self) -> EditTicket {
        self.editor_epoch += 1;
        EditTicket(self.editor_epoch)
    }

    pub fn is_current_edit(&self, ticket: EditTicket) -> bool {
        ticket.0 == self.editor_epoch
    }

    pub fn open_create(&mut self) {
        self.editor_epoch += 1;
        self.status = EditorStatus::Creating;
    }

    /// Open the editor on a fetched record. Returns `false` without touching
    /// the status when `ticket` has been superseded.
    pub fn open_edit(&mut self, ticket: EditTicket, selected: Category) -> bool {
        if !self.is_current_edit(ticket) {
            log::debug!(
                "Dropping superseded edit fetch for '{}' (ticket {}, latest {})",
                selected.id,
                ticket.0,
                self.editor_epoch
            );
            return false;
        }
        self.status = EditorStatus::Editing { selected };
        true
    }

    pub fn close(&mut self) {
        self.editor_epoch += 1;
        self.status = EditorStatus::Idle;
    }
}
