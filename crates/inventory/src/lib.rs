//! Inventory domain module.
//!
//! This crate contains the record-management rules for stocked items: CRUD
//! operations, their validation, and the audit/history bookkeeping they
//! produce. No terminal IO and no persistence.

pub mod audit;
pub mod item;
pub mod listing;
pub mod store;
pub mod sync;
pub mod update;
pub mod validation;

pub use audit::{AuditAction, AuditDetails, AuditEntry, AuditLog};
pub use item::{DeletedItem, Item, NewItem};
pub use listing::Listing;
pub use store::{DeleteOutcome, InventoryStore};
pub use sync::SyncReport;
pub use update::{FieldValue, ItemField, ItemUpdate, UpdatePolicy};
