//! Category Admin Core Library
//!
//! Headless state and workflow for administering a flat list of categories:
//! - Field schema and validation (`schema`)
//! - Dual-mode record editor (`editor`)
//! - List state with superseded-fetch detection (`list`)
//! - List controller that keeps rows in sync with the server (`controller`)
//! - Standalone edit-by-id page (`edit_page`)
//!
//! Rendering and navigation are left to the caller. All network access goes
//! through the [`CategoryApi`] trait so the workflow runs against any backend.

pub mod controller;
pub mod edit_page;
pub mod editor;
pub mod error;
pub mod list;
pub mod schema;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use category_admin_api::{ApiError, Category, CategoryApi, CategoryUpdate, NewCategory};
pub use controller::{Confirm, RecordListController};
pub use edit_page::{EditPageController, EditPageState};
pub use editor::{CategoryPayload, EditorMode, ModeKind, RecordEditor, SubmitOutcome};
pub use error::{CoreError, CoreResult};
pub use list::{columns, CategoryRow, EditTicket, EditorStatus, ListState, ListTicket};
pub use schema::{FieldError, FieldErrors, FieldKey, FieldKind, FieldSpec, FieldValues, CATEGORY_FIELDS};
