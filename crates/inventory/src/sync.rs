//! Simulated external-system sync.
//!
//! Extension point only: nothing leaves the process.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::Clock;

use crate::store::InventoryStore;

/// Outcome of a (simulated) sync. Always a success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub system: String,
    /// Live items that a real integration would have pushed.
    pub items: usize,
    pub synced_at: DateTime<Utc>,
    pub simulated: bool,
}

impl<C: Clock> InventoryStore<C> {
    /// Pretend to push the live inventory to `system_name`.
    ///
    /// Accepts any text (including empty), performs no IO, mutates nothing.
    pub fn sync_with_external_system(&self, system_name: &str) -> SyncReport {
        let report = SyncReport {
            system: system_name.to_string(),
            items: self.len(),
            synced_at: self.clock().now(),
            simulated: true,
        };

        tracing::info!(
            system = system_name,
            items = report.items,
            "simulated sync with external system"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use stockroom_core::FixedClock;

    use super::*;
    use crate::NewItem;

    #[test]
    fn sync_always_succeeds_and_changes_nothing() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let mut store = InventoryStore::with_clock(FixedClock(at));
        store
            .add_item(
                "A1",
                NewItem {
                    name: "Widget".to_string(),
                    category: "Tools".to_string(),
                    quantity: 5,
                    supplier: "Acme".to_string(),
                    price: 9.99,
                    location: "Bin1".to_string(),
                },
            )
            .unwrap();

        let report = store.sync_with_external_system("ERP-Link");
        assert_eq!(
            report,
            SyncReport {
                system: "ERP-Link".to_string(),
                items: 1,
                synced_at: at,
                simulated: true,
            }
        );
        assert_eq!(store.audit_log().len(), 1);

        let report = store.sync_with_external_system("");
        assert_eq!(report.system, "");
    }
}
