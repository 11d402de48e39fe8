//! Field constraints checked before any mutation.
//!
//! Pure functions; the store calls them, callers never need to.

use stockroom_core::{DomainError, DomainResult};

use crate::item::NewItem;

/// All four text fields must be non-empty.
///
/// All-or-nothing: a single combined error, not one per field.
pub fn ensure_text_fields(input: &NewItem) -> DomainResult<()> {
    let all_present = [
        &input.name,
        &input.category,
        &input.supplier,
        &input.location,
    ]
    .iter()
    .all(|v| !v.is_empty());

    if all_present {
        Ok(())
    } else {
        Err(DomainError::invalid_field("all text fields are required"))
    }
}

pub fn ensure_text(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::invalid_field(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub fn ensure_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid_value("quantity must be non-negative"));
    }
    Ok(())
}

pub fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::invalid_value("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::invalid_value("price must be non-negative"));
    }
    Ok(())
}
