//! Category list controller
//!
//! Owns the list rows and the editor, and re-fetches the full collection
//! after every mutation instead of patching rows locally.

use std::sync::Arc;

use category_admin_api::CategoryApi;

use crate::editor::{EditorMode, RecordEditor, SubmitOutcome};
use crate::error::{CoreError, CoreResult};
use crate::list::{CategoryRow, ListState};

/// Interactive yes/no prompt
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Category list page controller
///
/// Every fetching method takes `&mut self`, so at most one request is in
/// flight per controller and each result is applied in call order. The
/// `ListState` tickets only come into play for callers that drive
/// `ListState` directly and overlap its fetches.
pub struct RecordListController {
    api: Arc<dyn CategoryApi>,
    state: ListState,
    /// `Some` exactly while the state reports an open editor
    editor: Option<RecordEditor>,
}

impl RecordListController {
    #[must_use]
    pub fn new(api: Arc<dyn CategoryApi>) -> Self {
        Self {
            api,
            state: ListState::new(),
            editor: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn rows(&self) -> &[CategoryRow] {
        self.state.rows()
    }

    pub fn editor(&self) -> Option<&RecordEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut RecordEditor> {
        self.editor.as_mut()
    }

    /// Fetch the full collection and replace the rows.
    ///
    /// On failure the current rows are kept (empty before the first
    /// successful load) and the error is logged and returned.
    pub async fn load(&mut self) -> CoreResult<()> {
        let ticket = self.state.begin_list_fetch();
        match self.api.list_categories().await {
            Ok(records) => {
                let count = records.len();
                if self.state.apply_list(ticket, records) {
                    log::debug!("Loaded {count} categories");
                }
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                err.log("Load categories");
                Err(err)
            }
        }
    }

    /// Reload, ignoring the result; `load` already logged any failure.
    async fn refresh(&mut self) {
        let _ = self.load().await;
    }

    /// Open an empty editor in create mode.
    pub fn open_for_create(&mut self) {
        self.state.open_create();
        self.set_editor_mode(EditorMode::Create);
    }

    /// Fetch `row`'s record by id and open the editor on it.
    ///
    /// The row's own fields are never used to fill the form. If the fetch
    /// fails the editor is left as it was.
    pub async fn open_for_edit(&mut self, row: &CategoryRow) -> CoreResult<()> {
        let ticket = self.state.begin_edit_fetch();
        let record = match self.api.get_category(&row.key).await {
            Ok(record) => record,
            Err(e) => {
                let err = CoreError::from(e);
                err.log("Fetch category for edit");
                return Err(err);
            }
        };

        if self.state.open_edit(ticket, record.clone()) {
            self.set_editor_mode(EditorMode::Edit(record));
        }
        Ok(())
    }

    /// Delete `row` after confirmation, then re-fetch the list.
    ///
    /// Returns `Ok(false)` if the user declined. The list is re-fetched
    /// whether or not the delete succeeded.
    pub async fn delete(&mut self, row: &CategoryRow, confirm: &dyn Confirm) -> CoreResult<bool> {
        let prompt = format!("Are you sure you want to delete \"{}\"?", row.name);
        if !confirm.confirm(&prompt) {
            log::debug!("Delete of '{}' declined", row.key);
            return Ok(false);
        }

        let result = self.api.delete_category(&row.key).await;
        if let Err(e) = &result {
            CoreError::from(e.clone()).log("Delete category");
        } else {
            log::info!("Deleted category {}", row.key);
        }

        self.refresh().await;
        result.map(|()| true).map_err(CoreError::from)
    }

    /// Close the editor and clear the selection.
    pub fn close_editor(&mut self) {
        self.state.close();
        self.editor = None;
    }

    /// Re-fetch the list, then close the editor.
    pub async fn on_submit_complete(&mut self) {
        self.refresh().await;
        self.close_editor();
    }

    /// Submit the open editor. `None` if no editor is open.
    ///
    /// A successful submit triggers [`on_submit_complete`](Self::on_submit_complete);
    /// any other outcome leaves the editor open.
    pub async fn submit_editor(&mut self) -> Option<SubmitOutcome> {
        let editor = self.editor.as_mut()?;
        let outcome = editor.submit(self.api.as_ref()).await;
        if outcome.is_submitted() {
            self.on_submit_complete().await;
        }
        Some(outcome)
    }

    /// Reset and close the editor without any request.
    pub fn cancel_editor(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cancel();
        }
        self.close_editor();
    }

    fn set_editor_mode(&mut self, mode: EditorMode) {
        match self.editor.as_mut() {
            Some(editor) => editor.set_mode(mode),
            None => self.editor = Some(RecordEditor::new(mode)),
        }
    }
}
