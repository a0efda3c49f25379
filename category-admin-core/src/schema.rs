//! Category form schema
//!
//! Fields are declared once in [`CATEGORY_FIELDS`]; binding raw input,
//! coercion and validation are driven from that table instead of per-field
//! code paths.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use category_admin_api::{Category, NewCategory};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Order,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Order => "order",
        }
    }

    /// Schema entry for this key
    pub fn spec(self) -> &'static FieldSpec {
        match self {
            Self::Name => &CATEGORY_FIELDS[0],
            Self::Order => &CATEGORY_FIELDS[1],
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "order" => Ok(Self::Order),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

/// How raw input is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept as typed
    Text,
    /// Parsed into a JSON number
    Number,
}

/// Field definition
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Display label
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown when a required field is blank
    pub required_message: &'static str,
}

/// The category form, in display order.
pub static CATEGORY_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        key: FieldKey::Name,
        label: "Category Name",
        kind: FieldKind::Text,
        required: true,
        required_message: "Category name is required",
    },
    FieldSpec {
        key: FieldKey::Order,
        label: "Order",
        kind: FieldKind::Number,
        required: true,
        required_message: "Order is required",
    },
];

/// Per-field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    /// Blank input in a required field
    Required,
    /// Input of a number field did not parse
    NotANumber,
}

impl FieldError {
    /// User-facing message for this error on `key`.
    pub fn message(self, key: FieldKey) -> &'static str {
        match self {
            Self::Required => key.spec().required_message,
            Self::NotANumber => "Order must be a number",
        }
    }
}

/// Coerced field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
}

impl FieldSpec {
    /// Coerce raw input. `Ok(None)` means an optional field was left blank.
    pub fn coerce(&self, raw: &str) -> Result<Option<FieldValue>, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(None)
            };
        }

        match self.kind {
            FieldKind::Text => Ok(Some(FieldValue::Text(raw.to_string()))),
            FieldKind::Number => parse_number(trimmed)
                .map(|n| Some(FieldValue::Number(n)))
                .ok_or(FieldError::NotANumber),
        }
    }
}

/// Parse a finite number, keeping integers integral (`"2"` -> `2`, not `2.0`).
pub fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(i.into());
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Raw field input bound to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldKey, String>,
}

impl FieldValues {
    /// Every field blank.
    pub fn empty() -> Self {
        Self {
            values: CATEGORY_FIELDS
                .iter()
                .map(|spec| (spec.key, String::new()))
                .collect(),
        }
    }

    /// Fields of an existing record.
    pub fn from_category(category: &Category) -> Self {
        let mut values = Self::empty();
        values.set(FieldKey::Name, category.name.clone());
        values.set(FieldKey::Order, category.order.to_string());
        values
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        self.values.insert(key, value);
    }

    /// Whether every field is blank.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// Validate against [`CATEGORY_FIELDS`] and bind into a request body.
    pub fn validate(&self) -> Result<NewCategory, FieldErrors> {
        let mut errors = FieldErrors::default();
        let mut bound = BTreeMap::new();

        for spec in &CATEGORY_FIELDS {
            match spec.coerce(self.get(spec.key)) {
                Ok(Some(value)) => {
                    bound.insert(spec.key, value);
                }
                Ok(None) => {}
                Err(e) => errors.insert(spec.key, e),
            }
        }

        let name = match bound.remove(&FieldKey::Name) {
            Some(FieldValue::Text(name)) => Some(name),
            _ => None,
        };
        let order = match bound.remove(&FieldKey::Order) {
            Some(FieldValue::Number(order)) => Some(order),
            _ => None,
        };

        match (name, order) {
            (Some(name), Some(order)) if errors.is_empty() => Ok(NewCategory { name, order }),
            (name, order) => {
                if name.is_none() {
                    errors.insert_if_absent(FieldKey::Name, FieldError::Required);
                }
                if order.is_none() {
                    errors.insert_if_absent(FieldKey::Order, FieldError::Required);
                }
                Err(errors)
            }
        }
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::empty()
    }
}

/// Validation errors keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FieldKey, FieldError>);

impl FieldErrors {
    pub fn insert(&mut self, key: FieldKey, error: FieldError) {
        self.0.insert(key, error);
    }

    fn insert_if_absent(&mut self, key: FieldKey, error: FieldError) {
        self.0.entry(key).or_insert(error);
    }

    pub fn remove(&mut self, key: FieldKey) {
        self.0.remove(&key);
    }

    pub fn get(&self, key: FieldKey) -> Option<FieldError> {
        self.0.get(&key).copied()
    }

    /// Message to show under `key`, if that field is in error.
    pub fn message(&self, key: FieldKey) -> Option<&'static str> {
        self.get(key).map(|e| e.message(key))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, FieldError)> + '_ {
        self.0.iter().map(|(k, e)| (*k, *e))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{key}: {}", error.message(key))?;
            first = false;
        }
        Ok(())
    }
}
