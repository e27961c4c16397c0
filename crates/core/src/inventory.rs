//! Host inventory: host group name to per-address status records.
//!
//! The inventory is built once from a seed list and is read-only afterwards.
//! Callers obtain it through [`InventorySource`] so the classifier never
//! depends on where the data came from.

use std::collections::BTreeMap;
use std::net::IpAddr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// One `(host group, address, active)` triple as it appears in seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRecord {
    pub host_group: &'static str,
    pub address: &'static str,
    pub active: bool,
}

const fn seed(host_group: &'static str, address: &'static str, active: bool) -> SeedRecord {
    SeedRecord {
        host_group,
        address,
        active,
    }
}

/// The fixed seed served by the optimizer.
pub const DEFAULT_SEED: &[SeedRecord] = &[
    seed("mta-prod-1", "127.0.0.1", true),
    seed("mta-prod-1", "127.0.0.2", false),
    seed("mta-prod-2", "127.0.0.3", true),
    seed("mta-prod-2", "127.0.0.4", true),
    seed("mta-prod-2", "127.0.0.5", false),
    seed("mta-prod-3", "127.0.0.6", false),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Status of a single address within a host group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressStatus {
    pub address: IpAddr,
    pub active: bool,
}

impl AddressStatus {
    pub fn new(address: IpAddr, active: bool) -> Self {
        Self { address, active }
    }
}

/// Read-only mapping of host group name to its address statuses.
///
/// Backed by a `BTreeMap`, so iteration is lexicographic by group name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    groups: BTreeMap<String, Vec<AddressStatus>>,
}

impl Inventory {
    /// Group seed triples by host group name.
    ///
    /// Addresses keep their seed order within a group. Fails on a blank
    /// group name or an address that is not a valid IP.
    pub fn from_seed(records: &[SeedRecord]) -> Result<Self, CoreError> {
        let mut groups: BTreeMap<String, Vec<AddressStatus>> = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            let name = record.host_group.trim();
            if name.is_empty() {
                return Err(CoreError::InvalidSeed(format!(
                    "record {idx} has an empty host group name"
                )));
            }

            let address: IpAddr = record.address.parse().map_err(|e| {
                CoreError::InvalidSeed(format!(
                    "record {idx} ({name}) has invalid address '{}': {e}",
                    record.address
                ))
            })?;

            groups
                .entry(name.to_string())
                .or_default()
                .push(AddressStatus::new(address, record.active));
        }

        Ok(Self { groups })
    }

    /// Build an inventory directly from groups. Empty groups are kept.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<AddressStatus>)>,
        S: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|(name, statuses)| (name.into(), statuses))
                .collect(),
        }
    }

    /// Iterate `(group name, statuses)` in lexicographic name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[AddressStatus])> {
        self.groups
            .iter()
            .map(|(name, statuses)| (name.as_str(), statuses.as_slice()))
    }

    /// Number of host groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of addresses across all groups.
    pub fn address_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Build the inventory from [`DEFAULT_SEED`].
pub fn load() -> Result<Inventory, CoreError> {
    Inventory::from_seed(DEFAULT_SEED)
}

// ---------------------------------------------------------------------------
// Source abstraction
// ---------------------------------------------------------------------------

/// Anything that can produce an [`Inventory`].
pub trait InventorySource {
    fn fetch(&self) -> Result<Inventory, CoreError>;
}

/// Inventory source backed by a static seed list.
#[derive(Debug, Clone, Copy)]
pub struct SeedInventory {
    records: &'static [SeedRecord],
}

impl SeedInventory {
    pub fn new(records: &'static [SeedRecord]) -> Self {
        Self { records }
    }
}

impl Default for SeedInventory {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl InventorySource for SeedInventory {
    fn fetch(&self) -> Result<Inventory, CoreError> {
        Inventory::from_seed(self.records)
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use assert_matches::assert_matches;

    use super::*;

    fn group<'a>(inventory: &'a Inventory, name: &str) -> &'a [AddressStatus] {
        inventory
            .groups()
            .find(|(n, _)| *n == name)
            .map(|(_, statuses)| statuses)
            .unwrap()
    }

    #[test]
    fn load_groups_default_seed() {
        let inventory = load().unwrap();

        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.address_count(), 6);
        assert_eq!(group(&inventory, "mta-prod-1").len(), 2);
        assert_eq!(group(&inventory, "mta-prod-2").len(), 3);
        assert_eq!(group(&inventory, "mta-prod-3").len(), 1);
    }

    #[test]
    fn load_never_yields_empty_groups() {
        let inventory = load().unwrap();
        assert!(inventory.groups().all(|(_, statuses)| !statuses.is_empty()));
    }

    #[test]
    fn groups_preserve_seed_order_within_group() {
        let inventory = load().unwrap();
        let prod2: Vec<_> = group(&inventory, "mta-prod-2")
            .iter()
            .map(|s| s.address)
            .collect();

        assert_eq!(
            prod2,
            vec![
                IpAddr::V4(Ipv4Addr::new(127, 0, 0, 3)),
                IpAddr::V4(Ipv4Addr::new(127, 0, 0, 4)),
                IpAddr::V4(Ipv4Addr::new(127, 0, 0, 5)),
            ]
        );
    }

    #[test]
    fn groups_iterate_in_name_order() {
        const SEED: &[SeedRecord] = &[
            seed("zeta", "10.0.0.1", true),
            seed("alpha", "10.0.0.2", false),
            seed("mid", "::1", true),
        ];
        let inventory = Inventory::from_seed(SEED).unwrap();
        let names: Vec<_> = inventory.groups().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn rejects_invalid_address() {
        const SEED: &[SeedRecord] = &[seed("mta-prod-1", "not-an-ip", true)];
        assert_matches!(
            Inventory::from_seed(SEED),
            Err(CoreError::InvalidSeed(msg)) if msg.contains("not-an-ip")
        );
    }

    #[test]
    fn rejects_blank_group_name() {
        const SEED: &[SeedRecord] = &[seed("  ", "127.0.0.1", true)];
        assert_matches!(Inventory::from_seed(SEED), Err(CoreError::InvalidSeed(_)));
    }

    #[test]
    fn seed_source_matches_load() {
        assert_eq!(SeedInventory::default().fetch().unwrap(), load().unwrap());
    }

    #[test]
    fn empty_seed_gives_empty_inventory() {
        let inventory = SeedInventory::new(&[]).fetch().unwrap();
        assert!(inventory.is_empty());
        assert_eq!(inventory.address_count(), 0);
    }
}
