//! Standalone edit-by-id page

use std::sync::Arc;

use category_admin_api::CategoryApi;

use crate::editor::{RecordEditor, SubmitOutcome};
use crate::error::CoreError;

/// Page lifecycle
#[derive(Debug, Clone)]
pub enum EditPageState {
    /// Record not fetched yet
    Loading,
    /// Editor open on the fetched record
    Ready(RecordEditor),
    /// Done; the caller should navigate back to the list
    ReturnToList,
}

/// Controller for editing a single category addressed by id
pub struct EditPageController {
    api: Arc<dyn CategoryApi>,
    id: String,
    state: EditPageState,
}

impl EditPageController {
    /// A blank id goes straight to [`EditPageState::ReturnToList`].
    #[must_use]
    pub fn new(api: Arc<dyn CategoryApi>, id: impl Into<String>) -> Self {
        let id = id.into();
        let state = if id.trim().is_empty() {
            log::warn!("Edit page opened without a category id");
            EditPageState::ReturnToList
        } else {
            EditPageState::Loading
        };
        Self { api, id, state }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &EditPageState {
        &self.state
    }

    pub fn should_return_to_list(&self) -> bool {
        matches!(self.state, EditPageState::ReturnToList)
    }

    pub fn editor_mut(&mut self) -> Option<&mut RecordEditor> {
        match &mut self.state {
            EditPageState::Ready(editor) => Some(editor),
            _ => None,
        }
    }

    /// Fetch the record. Only acts while `Loading`.
    pub async fn load(&mut self) -> &EditPageState {
        if matches!(self.state, EditPageState::Loading) {
            self.state = match self.api.get_category(&self.id).await {
                Ok(record) => EditPageState::Ready(RecordEditor::edit(record)),
                Err(e) => {
                    CoreError::from(e).log("Load category for edit page");
                    EditPageState::ReturnToList
                }
            };
        }
        &self.state
    }

    /// Submit the editor. Success returns to the list; any other outcome
    /// keeps the page open. `None` unless `Ready`.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let outcome = match &mut self.state {
            EditPageState::Ready(editor) => editor.submit(self.api.as_ref()).await,
            _ => return None,
        };
        if outcome.is_submitted() {
            self.state = EditPageState::ReturnToList;
        }
        Some(outcome)
    }

    pub fn cancel(&mut self) {
        if let Some(editor) = self.editor_mut() {
            editor.cancel();
        }
        self.state = EditPageState::ReturnToList;
    }
}
