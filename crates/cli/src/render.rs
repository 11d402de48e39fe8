//! Text rendering of store entities (JSON-like lines).

use serde::Serialize;

use stockroom_core::Sku;
use stockroom_inventory::{AuditEntry, DeletedItem, Item};

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unrenderable: {e}>"))
}

pub fn item_line(sku: &Sku, item: &Item) -> String {
    format!("{sku}: {}", json(item))
}

pub fn audit_line(entry: &AuditEntry) -> String {
    json(entry)
}

pub fn deleted_line(deleted: &DeletedItem) -> String {
    item_line(&deleted.sku, &deleted.item)
}
