//! Typed update requests.
//!
//! Inside the crate an update is always an [`ItemUpdate`] variant, so an
//! unknown field cannot reach the store. Textual field names only exist at
//! the boundary ([`ItemField::from_str`], [`ItemUpdate::from_field`]), where
//! they fail with `InvalidField`.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::validation;

/// The six updatable fields of an [`crate::Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Name,
    Category,
    Quantity,
    Supplier,
    Price,
    Location,
}

impl ItemField {
    /// All fields, in display/prompt order.
    pub const ALL: [ItemField; 6] = [
        ItemField::Name,
        ItemField::Category,
        ItemField::Quantity,
        ItemField::Supplier,
        ItemField::Price,
        ItemField::Location,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Category => "category",
            ItemField::Quantity => "quantity",
            ItemField::Supplier => "supplier",
            ItemField::Price => "price",
            ItemField::Location => "location",
        }
    }
}

impl core::fmt::Display for ItemField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::invalid_field(format!("unknown field '{s}'")))
    }
}

/// Untyped value carried next to a textual field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

/// One field change, carrying its own payload type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ItemUpdate {
    SetName(String),
    SetCategory(String),
    SetQuantity(i64),
    SetSupplier(String),
    SetPrice(f64),
    SetLocation(String),
}

impl ItemUpdate {
    /// Build an update from a field name and an untyped value.
    ///
    /// Unknown names fail with `InvalidField`; a value of the wrong shape for
    /// the field fails with `InvalidValue`. Integers are accepted for `price`.
    pub fn from_field(name: &str, value: FieldValue) -> DomainResult<Self> {
        let field: ItemField = name.parse()?;

        let update = match (field, value) {
            (ItemField::Name, FieldValue::Text(v)) => ItemUpdate::SetName(v),
            (ItemField::Category, FieldValue::Text(v)) => ItemUpdate::SetCategory(v),
            (ItemField::Supplier, FieldValue::Text(v)) => ItemUpdate::SetSupplier(v),
            (ItemField::Location, FieldValue::Text(v)) => ItemUpdate::SetLocation(v),
            (ItemField::Quantity, FieldValue::Integer(v)) => ItemUpdate::SetQuantity(v),
            (ItemField::Price, FieldValue::Decimal(v)) => ItemUpdate::SetPrice(v),
            (ItemField::Price, FieldValue::Integer(v)) => ItemUpdate::SetPrice(v as f64),
            (field, other) => {
                return Err(DomainError::invalid_value(format!(
                    "{other:?} is not a valid value for {field}"
                )));
            }
        };

        Ok(update)
    }

    pub fn field(&self) -> ItemField {
        match self {
            ItemUpdate::SetName(_) => ItemField::Name,
            ItemUpdate::SetCategory(_) => ItemField::Category,
            ItemUpdate::SetQuantity(_) => ItemField::Quantity,
            ItemUpdate::SetSupplier(_) => ItemField::Supplier,
            ItemUpdate::SetPrice(_) => ItemField::Price,
            ItemUpdate::SetLocation(_) => ItemField::Location,
        }
    }

    /// Check the payload without touching any item.
    ///
    /// Text payloads must be non-empty so a live item never loses a required
    /// field; numeric payloads must be non-negative.
    pub fn validate(&self) -> DomainResult<()> {
        match self {
            ItemUpdate::SetName(v)
            | ItemUpdate::SetCategory(v)
            | ItemUpdate::SetSupplier(v)
            | ItemUpdate::SetLocation(v) => validation::ensure_text(self.field().as_str(), v),
            ItemUpdate::SetQuantity(v) => validation::ensure_quantity(*v),
            ItemUpdate::SetPrice(v) => validation::ensure_price(*v),
        }
    }
}

/// How `update_item` behaves when a later change in the same call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Apply changes one by one; stop at the first failure and keep whatever
    /// was already applied (no rollback).
    #[default]
    Sequential,
    /// Validate every change first; apply nothing unless all of them pass.
    Atomic,
}
