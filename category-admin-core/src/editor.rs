//! Dual-mode category editor
//!
//! One form that either creates a new category or updates an existing one.
//! Field values are always replaced wholesale when the mode changes, so
//! nothing typed in one session shows up in the next.

use category_admin_api::{Category, CategoryApi, CategoryUpdate, NewCategory};
use serde::Serialize;

use crate::error::CoreError;
use crate::schema::{FieldErrors, FieldKey, FieldValues};

/// Editor mode. `Edit` carries the record the form was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(Category),
}

impl EditorMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Create => ModeKind::Create,
            Self::Edit(_) => ModeKind::Edit,
        }
    }

    /// Record being edited, if any.
    pub fn initial_data(&self) -> Option<&Category> {
        match self {
            Self::Create => None,
            Self::Edit(category) => Some(category),
        }
    }
}

/// Mode without the attached record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Create,
    Edit,
}

/// Body sent by a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPayload {
    Create(NewCategory),
    Update(CategoryUpdate),
}

/// Result of [`RecordEditor::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// At least one field is invalid; no request was made.
    Invalid(FieldErrors),
    /// The request failed. Already logged; field errors are untouched.
    Failed(CoreError),
    /// The server accepted the request.
    Submitted {
        payload: CategoryPayload,
        saved: Category,
    },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// Category form state
#[derive(Debug, Clone)]
pub struct RecordEditor {
    mode: EditorMode,
    values: FieldValues,
    errors: FieldErrors,
}

impl RecordEditor {
    pub fn new(mode: EditorMode) -> Self {
        let values = match &mode {
            EditorMode::Create => FieldValues::empty(),
            EditorMode::Edit(category) => FieldValues::from_category(category),
        };
        Self {
            mode,
            values,
            errors: FieldErrors::default(),
        }
    }

    /// Empty form for a new category.
    pub fn create() -> Self {
        Self::new(EditorMode::Create)
    }

    /// Form pre-filled with `category`.
    pub fn edit(category: Category) -> Self {
        Self::new(EditorMode::Edit(category))
    }

    /// Switch mode (or the record being edited). All values and errors are
    /// replaced; nothing from the previous session survives.
    pub fn set_mode(&mut self, mode: EditorMode) {
        *self = Self::new(mode);
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.values.get(key)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Set one field's raw input. Clears that field's error.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.set(key, value.into());
        self.errors.remove(key);
    }

    pub fn title(&self) -> &'static str {
        match self.mode.kind() {
            ModeKind::Create => "Add New Category",
            ModeKind::Edit => "Edit Category",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode.kind() {
            ModeKind::Create => "Add",
            ModeKind::Edit => "Update",
        }
    }

    /// Only the edit form offers a cancel button.
    pub fn shows_cancel(&self) -> bool {
        self.mode.kind() == ModeKind::Edit
    }

    /// Validate the current values, recording per-field errors.
    pub fn validate(&mut self) -> Result<NewCategory, FieldErrors> {
        let result = self.values.validate();
        self.errors = match &result {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors.clone(),
        };
        result
    }

    /// Validate and, if valid, send exactly one create or update request.
    ///
    /// On success in create mode the form is cleared for the next entry;
    /// edit mode keeps its values because the owner closes the editor.
    pub async fn submit(&mut self, api: &dyn CategoryApi) -> SubmitOutcome {
        let fields = match self.validate() {
            Ok(fields) => fields,
            Err(errors) => {
                log::debug!("Submit blocked by validation: {errors}");
                return SubmitOutcome::Invalid(errors);
            }
        };

        let payload = match &self.mode {
            EditorMode::Create => CategoryPayload::Create(fields),
            EditorMode::Edit(initial) => {
                CategoryPayload::Update(CategoryUpdate::new(initial.id.clone(), fields))
            }
        };

        let result = match &payload {
            CategoryPayload::Create(req) => api.create_category(req).await,
            CategoryPayload::Update(req) => api.update_category(req).await,
        };

        match result {
            Ok(saved) => {
                log::info!("Saved category {} ({})", saved.id, saved.name);
                if self.mode.kind() == ModeKind::Create {
                    self.reset();
                }
                SubmitOutcome::Submitted { payload, saved }
            }
            Err(e) => {
                let err = CoreError::from(e);
                match self.mode.kind() {
                    ModeKind::Create => err.log("Create category"),
                    ModeKind::Edit => err.log("Update category"),
                }
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Clear the form. No network effect; the owner decides what happens next.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.values = FieldValues::empty();
        self.errors = FieldErrors::default();
    }
}
