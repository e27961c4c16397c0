//! Efficiency classifier.
//!
//! A host group is inefficient when its number of active addresses is at or
//! below the threshold. The comparison is done on signed integers, so a
//! negative threshold selects nothing.

use crate::inventory::{AddressStatus, Inventory};

/// Per-group active/total counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub host_group: String,
    pub active: usize,
    pub total: usize,
}

/// Number of active addresses in a group.
pub fn active_count(statuses: &[AddressStatus]) -> usize {
    statuses.iter().filter(|s| s.active).count()
}

/// Names of host groups whose active count is `<= threshold`, in inventory
/// iteration order.
pub fn classify(inventory: &Inventory, threshold: i64) -> Vec<String> {
    inventory
        .groups()
        .filter(|(_, statuses)| within_threshold(active_count(statuses), threshold))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Active and total counts for every group.
pub fn summarize(inventory: &Inventory) -> Vec<GroupSummary> {
    inventory
        .groups()
        .map(|(name, statuses)| GroupSummary {
            host_group: name.to_string(),
            active: active_count(statuses),
            total: statuses.len(),
        })
        .collect()
}

fn within_threshold(active: usize, threshold: i64) -> bool {
    // Counts beyond i64::MAX cannot be at or below any threshold.
    i64::try_from(active).is_ok_and(|active| active <= threshold)
}
