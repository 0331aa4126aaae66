//! Per-parent allocation-key normalization.

use std::collections::{BTreeMap, BTreeSet};

use ca_core::{parse_amount, records::AllocationKeyRecord, AccountId, CoreError};

/// Parent id → (child id, weight fraction) in key-input order.
/// Fractions for a parent sum to 1 when the raw sum was positive.
pub type WeightMap = BTreeMap<AccountId, Vec<(AccountId, f64)>>;

/// Group raw key entries by parent, scale each group so its weights sum
/// to 1, then drop entries whose child is not a direct child of the parent.
///
/// A zero raw sum substitutes a divisor of 1 rather than skipping the
/// group: the fractions come out equal to the raw (typically zero) weights,
/// and the engine flags the group as unusable downstream. Proportional
/// scaling also means `40/60` and `0.4/0.6` yield identical maps.
pub fn normalize_weights(
    keys: &[AllocationKeyRecord],
    children: &BTreeMap<AccountId, Vec<AccountId>>,
) -> Result<WeightMap, CoreError> {
    let mut grouped: BTreeMap<AccountId, Vec<(AccountId, f64)>> = BTreeMap::new();
    let mut sums: BTreeMap<AccountId, f64> = BTreeMap::new();

    for k in keys {
        let parent = AccountId::new(&k.parent_id);
        let child = AccountId::new(&k.child_id);
        let weight = parse_amount(&k.weight)?;
        grouped.entry(parent.clone()).or_default().push((child, weight));
        *sums.entry(parent).or_insert(0.0) += weight;
    }

    let mut out = WeightMap::new();
    for (parent, entries) in grouped {
        let sum = sums.get(&parent).copied().unwrap_or(0.0);
        let divisor = if sum == 0.0 { 1.0 } else { sum };
        let direct: BTreeSet<&AccountId> =
            children.get(&parent).into_iter().flatten().collect();
        let usable: Vec<(AccountId, f64)> = entries
            .into_iter()
            .map(|(child, w)| (child, w / divisor))
            .filter(|(child, _)| direct.contains(child))
            .collect();
        out.insert(parent, usable);
    }
    Ok(out)
}
