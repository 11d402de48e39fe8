//! In-memory inventory store: live items, audit trail, delete history.

use std::collections::{BTreeMap, btree_map};
use std::slice;

use stockroom_core::{Clock, DomainError, DomainResult, Sku, SystemClock};

use crate::audit::{AuditAction, AuditDetails, AuditEntry, AuditLog};
use crate::item::{DeletedItem, Item, NewItem};
use crate::listing::Listing;
use crate::update::{FieldValue, ItemUpdate, UpdatePolicy};

/// Result of a delete request that passed the existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The caller did not confirm; nothing changed.
    Cancelled,
}

/// Explicitly owned inventory state.
///
/// - `items`: live mapping `sku -> item`, iterated in SKU order
/// - `audit`: one entry per accepted mutation, chronological
/// - `deleted`: removed items, in deletion order
///
/// Single owner, `&mut self` mutation, no locking.
#[derive(Debug)]
pub struct InventoryStore<C = SystemClock> {
    items: BTreeMap<Sku, Item>,
    audit: AuditLog,
    deleted: Vec<DeletedItem>,
    policy: UpdatePolicy,
    clock: C,
}

impl InventoryStore<SystemClock> {
    /// Empty store on the wall clock with the sequential update policy.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InventoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InventoryStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: BTreeMap::new(),
            audit: AuditLog::new(),
            deleted: Vec::new(),
            policy: UpdatePolicy::default(),
            clock,
        }
    }

    pub fn with_policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    pub(crate) fn clock(&self) -> &C {
        &self.clock
    }

    pub fn add_item(&mut self, sku: impl Into<Sku>, input: NewItem) -> DomainResult<()> {
        let sku = sku.into();

        if self.items.contains_key(&sku) {
            tracing::warn!(%sku, action = "add", "rejected: duplicate sku");
            return Err(DomainError::duplicate_key(sku.as_str()));
        }

        let item = Item::new(input).inspect_err(|e| {
            tracing::warn!(%sku, action = "add", kind = e.kind(), "rejected: {e}");
        })?;

        self.audit.append(
            AuditAction::Add,
            sku.clone(),
            AuditDetails::Snapshot(item.clone()),
            self.clock.now(),
        );
        self.items.insert(sku.clone(), item);

        tracing::info!(%sku, action = "add", "item added");
        Ok(())
    }

    /// Apply typed changes to a live item, in order.
    ///
    /// On success one `update` entry is appended with the snapshots taken
    /// before and after the call. On failure no entry is appended; under
    /// [`UpdatePolicy::Sequential`] changes applied before the failing one
    /// stay applied.
    pub fn update_item(&mut self, sku: &str, updates: &[ItemUpdate]) -> DomainResult<()> {
        self.update_with(sku, updates.iter().cloned().map(Ok))
    }

    /// Like [`Self::update_item`], but with textual field names.
    ///
    /// Each pair is resolved only when its turn comes, so an unknown name
    /// aborts the call at that position with `InvalidField`.
    pub fn update_item_fields<I, N>(&mut self, sku: &str, pairs: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = (N, FieldValue)>,
        N: AsRef<str>,
    {
        self.update_with(
            sku,
            pairs
                .into_iter()
                .map(|(name, value)| ItemUpdate::from_field(name.as_ref(), value)),
        )
    }

    fn update_with<I>(&mut self, sku: &str, updates: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = DomainResult<ItemUpdate>>,
    {
        let Some(item) = self.items.get_mut(sku) else {
            tracing::warn!(sku, action = "update", "rejected: not found");
            return Err(DomainError::not_found(sku));
        };

        let old = item.clone();
        let result = match self.policy {
            UpdatePolicy::Sequential => apply_sequential(item, updates),
            UpdatePolicy::Atomic => apply_atomic(item, updates),
        };

        if let Err(e) = result {
            let partially_applied = *item != old;
            tracing::warn!(
                sku,
                action = "update",
                kind = e.kind(),
                partially_applied,
                "rejected: {e}"
            );
            return Err(e);
        }

        let new = item.clone();
        self.audit.append(
            AuditAction::Update,
            Sku::new(sku),
            AuditDetails::Change { old, new },
            self.clock.now(),
        );

        tracing::info!(sku, action = "update", "item updated");
        Ok(())
    }

    /// Remove a live item into the delete history.
    ///
    /// Confirmation is collected by the caller; an unconfirmed request is a
    /// no-op reported as [`DeleteOutcome::Cancelled`]. The existence check
    /// runs first either way.
    pub fn delete_item(&mut self, sku: &str, confirmed: bool) -> DomainResult<DeleteOutcome> {
        if !self.items.contains_key(sku) {
            tracing::warn!(sku, action = "delete", "rejected: not found");
            return Err(DomainError::not_found(sku));
        }

        if !confirmed {
            tracing::info!(sku, action = "delete", "deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let Some((key, item)) = self.items.remove_entry(sku) else {
            return Err(DomainError::not_found(sku));
        };

        self.audit.append(
            AuditAction::Delete,
            key.clone(),
            AuditDetails::Snapshot(item.clone()),
            self.clock.now(),
        );
        self.deleted.push(DeletedItem { sku: key, item });

        tracing::info!(sku, action = "delete", "item deleted");
        Ok(DeleteOutcome::Deleted)
    }

    pub fn get_item(&self, sku: &str) -> Option<&Item> {
        self.items.get(sku)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// Live items in SKU order.
    pub fn list_inventory(&self) -> Listing<btree_map::Iter<'_, Sku, Item>> {
        Listing::new(self.items.iter(), self.items.len())
    }

    /// Audit entries, oldest first.
    pub fn list_audit_trail(&self) -> Listing<slice::Iter<'_, AuditEntry>> {
        let entries = self.audit.entries();
        Listing::new(entries.iter(), entries.len())
    }

    /// Deleted items, in deletion order.
    pub fn list_deleted_items(&self) -> Listing<slice::Iter<'_, DeletedItem>> {
        Listing::new(self.deleted.iter(), self.deleted.len())
    }
}

fn apply_sequential<I>(item: &mut Item, updates: I) -> DomainResult<()>
where
    I: IntoIterator<Item = DomainResult<ItemUpdate>>,
{
    for update in updates {
        item.apply(&update?)?;
    }
    Ok(())
}

fn apply_atomic<I>(item: &mut Item, updates: I) -> DomainResult<()>
where
    I: IntoIterator<Item = DomainResult<ItemUpdate>>,
{
    let updates = updates.into_iter().collect::<DomainResult<Vec<_>>>()?;
    for update in &updates {
        update.validate()?;
    }
    for update in &updates {
        item.apply(update)?;
    }
    Ok(())
}
