//! Append-only record of every accepted mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{AuditEntryId, Sku};

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Add,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Add => "add",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action-specific payload.
///
/// `add` and `delete` carry a full snapshot; `update` carries the snapshot
/// taken before the call and the one taken after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditDetails {
    Change { old: Item, new: Item },
    Snapshot(Item),
}

/// Immutable record of one accepted mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    id: AuditEntryId,
    action: AuditAction,
    sku: Sku,
    timestamp: DateTime<Utc>,
    details: AuditDetails,
}

impl AuditEntry {
    pub fn id(&self) -> AuditEntryId {
        self.id
    }

    pub fn action(&self) -> AuditAction {
        self.action
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn details(&self) -> &AuditDetails {
        &self.details
    }
}

/// Ordered audit sequence. Insertion order is chronological order.
///
/// Only the store can append; nothing can remove or rewrite an entry.
#[derive(Debug, Default, Clone)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(
        &mut self,
        action: AuditAction,
        sku: Sku,
        details: AuditDetails,
        timestamp: DateTime<Utc>,
    ) -> &AuditEntry {
        tracing::debug!(%sku, action = action.as_str(), "audit entry recorded");

        self.entries.push(AuditEntry {
            id: AuditEntryId::new(),
            action,
            sku,
            timestamp,
            details,
        });

        // Just pushed, so the slice is non-empty.
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }

    /// History of a single SKU, oldest first.
    pub fn entries_for<'a>(&'a self, sku: &'a str) -> impl Iterator<Item = &'a AuditEntry> + Clone + 'a {
        self.entries.iter().filter(move |e| e.sku.as_str() == sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;
    use chrono::TimeZone;

    fn item(name: &str) -> Item {
        Item::new(NewItem {
            name: name.to_string(),
            category: "Tools".to_string(),
            quantity: 1,
            supplier: "Acme".to_string(),
            price: 2.5,
            location: "Bin1".to_string(),
        })
        .unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn append_preserves_chronological_order() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Add, Sku::new("A1"), AuditDetails::Snapshot(item("a")), at(0));
        log.append(AuditAction::Add, Sku::new("B2"), AuditDetails::Snapshot(item("b")), at(1));
        log.append(AuditAction::Delete, Sku::new("A1"), AuditDetails::Snapshot(item("a")), at(2));

        let actions: Vec<_> = log.entries().iter().map(|e| e.action()).collect();
        assert_eq!(
            actions,
            vec![AuditAction::Add, AuditAction::Add, AuditAction::Delete]
        );
        assert_eq!(log.last().unwrap().timestamp(), at(2));
    }

    #[test]
    fn entries_for_filters_by_sku() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Add, Sku::new("A1"), AuditDetails::Snapshot(item("a")), at(0));
        log.append(AuditAction::Add, Sku::new("B2"), AuditDetails::Snapshot(item("b")), at(1));
        log.append(AuditAction::Delete, Sku::new("A1"), AuditDetails::Snapshot(item("a")), at(2));

        assert_eq!(log.entries_for("A1").count(), 2);
        assert_eq!(log.entries_for("B2").count(), 1);
        assert_eq!(log.entries_for("C3").count(), 0);
    }

    #[test]
    fn update_details_serialize_as_old_new_pair() {
        let mut log = AuditLog::new();
        let entry = log.append(
            AuditAction::Update,
            Sku::new("A1"),
            AuditDetails::Change {
                old: item("before"),
                new: item("after"),
            },
            at(0),
        );

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["action"], "update");
        assert_eq!(json["sku"], "A1");
        assert_eq!(json["details"]["old"]["name"], "before");
        assert_eq!(json["details"]["new"]["name"], "after");
    }
}
