//! Wire types for the category collection

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A category as stored on the server.
///
/// Decoded from `_id`, `id`, or both (`_id` wins); always encoded as `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredCategory")]
pub struct Category {
    /// Server-assigned identifier
    pub id: String,
    /// Display label, never empty
    pub name: String,
    /// Numeric sort key
    pub order: Number,
}

/// Category document as the server sends it
#[derive(Deserialize)]
struct StoredCategory {
    #[serde(rename = "_id")]
    document_id: Option<String>,
    id: Option<String>,
    name: String,
    order: Number,
}

impl TryFrom<StoredCategory> for Category {
    type Error = String;

    fn try_from(stored: StoredCategory) -> Result<Self, Self::Error> {
        let id = stored
            .document_id
            .or(stored.id)
            .ok_or_else(|| "missing field `_id` or `id`".to_string())?;
        Ok(Self {
            id,
            name: stored.name,
            order: stored.order,
        })
    }
}

/// Body of `POST /category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub order: Number,
}

/// Body of `PUT /category`. The target is identified by `id` in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub id: String,
    pub name: String,
    pub order: Number,
}

impl CategoryUpdate {
    /// Build an update for `id` from validated field values.
    #[must_use]
    pub fn new(id: impl Into<String>, fields: NewCategory) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            order: fields.order,
        }
    }
}
