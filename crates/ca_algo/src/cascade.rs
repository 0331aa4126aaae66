//! The iterative cascading pass: push parent balances down the tree until
//! no ready parent remains.
//!
//! Each full pass moves every still-nonzero parent's balance exactly one
//! level down, so an acyclic chart settles within its depth. The pass cap
//! only bounds externally-malformed input; cycles are the validator's job
//! and are not re-checked here.

use std::collections::{BTreeMap, BTreeSet};

use ca_core::AccountId;

use crate::ledger::Ledger;
use crate::weights::WeightMap;

/// Safety net for malformed input; unreachable for any acyclic chart.
pub const DEFAULT_MAX_PASSES: usize = 10_000;

/// Distribute pending amounts to a fixed point, mutating `ledger` in place.
/// Returns the diagnostic notes in encounter order.
///
/// Within a pass, ready parents (nonzero balance, present in the weight
/// map) are snapshotted up front and visited in id order; each parent's
/// balance is re-read at its turn, so funds received earlier in the same
/// pass are included. A parent whose usable weights sum to zero or less, or
/// whose key filtered down to nothing, is noted once and retired — its
/// balance is final. Money is conserved: every distribution moves the
/// parent's exact current balance onto its children.
pub fn cascade(
    ledger: &mut Ledger,
    children: &BTreeMap<AccountId, Vec<AccountId>>,
    weights: &WeightMap,
    max_passes: usize,
) -> Vec<String> {
    let mut notes: Vec<String> = Vec::new();
    let mut retired: BTreeSet<AccountId> = BTreeSet::new();

    let mut passes = 0usize;
    let mut progress = true;
    while progress && passes < max_passes {
        passes += 1;
        progress = false;

        let ready: Vec<AccountId> = weights
            .keys()
            .filter(|p| !retired.contains(*p))
            .filter(|p| balance(ledger, p) != 0.0)
            .cloned()
            .collect();
        if ready.is_empty() {
            break;
        }

        for parent in ready {
            let amount = balance(ledger, &parent);
            if amount == 0.0 {
                continue;
            }
            let targets = weights.get(&parent).map(Vec::as_slice).unwrap_or_default();
            // Re-derive the fraction sum instead of trusting it to be 1.
            let sum: f64 = targets.iter().map(|(_, w)| *w).sum();
            if targets.is_empty() || sum <= 0.0 {
                notes.push(format!(
                    "account '{parent}' has a zero/unusable allocation key; balance retained"
                ));
                retired.insert(parent);
                continue;
            }
            for (child, weight) in targets {
                *ledger.entry(child.clone()).or_insert(0.0) += amount * (weight / sum);
            }
            ledger.insert(parent, 0.0);
            progress = true;
        }
    }

    if passes >= max_passes {
        notes.push(
            "iteration cap reached before settling; check the chart for loops or malformed keys"
                .to_string(),
        );
    }

    // Parents that still hold funds, have children, and never had a key at
    // all. Retired parents were already noted above.
    for (parent, kids) in children {
        if parent.is_root() || kids.is_empty() || retired.contains(parent) {
            continue;
        }
        if balance(ledger, parent) != 0.0 && !weights.contains_key(parent) {
            notes.push(format!(
                "account '{parent}' has a nonzero balance but no allocation key for its children; balance retained"
            ));
        }
    }

    notes
}

fn balance(ledger: &Ledger, id: &AccountId) -> f64 {
    ledger.get(id).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AccountId {
        AccountId::new(s)
    }

    fn adjacency(edges: &[(&str, &[&str])]) -> BTreeMap<AccountId, Vec<AccountId>> {
        edges
            .iter()
            .map(|(p, kids)| (id(p), kids.iter().map(|k| id(k)).collect()))
            .collect()
    }

    #[test]
    fn two_level_chain_settles_in_depth_passes() {
        let children = adjacency(&[("", &["100"]), ("100", &["110", "120"]), ("120", &["121", "122"])]);
        let mut ledger: Ledger = [
            (id("100"), 100_000.0),
            (id("110"), 0.0),
            (id("120"), 0.0),
            (id("121"), 0.0),
            (id("122"), 0.0),
        ]
        .into();
        let weights: WeightMap = [
            (id("100"), vec![(id("110"), 0.4), (id("120"), 0.6)]),
            (id("120"), vec![(id("121"), 0.3), (id("122"), 0.7)]),
        ]
        .into();

        let notes = cascade(&mut ledger, &children, &weights, DEFAULT_MAX_PASSES);
        assert!(notes.is_empty());
        assert_eq!(ledger[&id("100")], 0.0);
        assert_eq!(ledger[&id("120")], 0.0);
        assert!((ledger[&id("110")] - 40_000.0).abs() < 1e-9);
        assert!((ledger[&id("121")] - 18_000.0).abs() < 1e-9);
        assert!((ledger[&id("122")] - 42_000.0).abs() < 1e-9);
    }

    #[test]
    fn keyless_parent_retains_balance_with_one_note() {
        let children = adjacency(&[("", &["200"]), ("200", &["210", "220"])]);
        let mut ledger: Ledger = [(id("200"), 100.0), (id("210"), 0.0), (id("220"), 0.0)].into();
        let weights = WeightMap::new();

        let notes = cascade(&mut ledger, &children, &weights, DEFAULT_MAX_PASSES);
        assert_eq!(ledger[&id("200")], 100.0);
        assert_eq!(ledger[&id("210")], 0.0);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("200"));
    }

    #[test]
    fn filtered_out_key_is_noted_and_retired_once() {
        let children = adjacency(&[("", &["400"]), ("400", &["410"])]);
        let mut ledger: Ledger = [(id("400"), 50.0), (id("410"), 0.0)].into();
        // Key pointed at a non-child; the normalizer emptied the group.
        let weights: WeightMap = [(id("400"), Vec::new())].into();

        let notes = cascade(&mut ledger, &children, &weights, DEFAULT_MAX_PASSES);
        assert_eq!(ledger[&id("400")], 50.0);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("400"));
    }

    #[test]
    fn negative_weight_sum_is_unusable() {
        let children = adjacency(&[("", &["100"]), ("100", &["110", "120"])]);
        let mut ledger: Ledger = [(id("100"), 10.0), (id("110"), 0.0), (id("120"), 0.0)].into();
        let weights: WeightMap =
            [(id("100"), vec![(id("110"), -1.0), (id("120"), 0.5)])].into();

        let notes = cascade(&mut ledger, &children, &weights, DEFAULT_MAX_PASSES);
        assert_eq!(ledger[&id("100")], 10.0);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn negative_balances_cascade_too() {
        let children = adjacency(&[("", &["100"]), ("100", &["110", "120"])]);
        let mut ledger: Ledger = [(id("100"), -50.0), (id("110"), 0.0), (id("120"), 0.0)].into();
        let weights: WeightMap =
            [(id("100"), vec![(id("110"), 0.5), (id("120"), 0.5)])].into();

        let notes = cascade(&mut ledger, &children, &weights, DEFAULT_MAX_PASSES);
        assert!(notes.is_empty());
        assert_eq!(ledger[&id("110")], -25.0);
        assert_eq!(ledger[&id("120")], -25.0);
    }

    #[test]
    fn cap_exhaustion_leaves_a_note_and_a_partial_ledger() {
        // Mutually-parented accounts ping-pong the balance forever; only the
        // cap stops them. (The validator would have flagged this chart.)
        let children = adjacency(&[("A", &["B"]), ("B", &["A"])]);
        let mut ledger: Ledger = [(id("A"), 8.0), (id("B"), 0.0)].into();
        let weights: WeightMap = [
            (id("A"), vec![(id("B"), 1.0)]),
            (id("B"), vec![(id("A"), 1.0)]),
        ]
        .into();

        let notes = cascade(&mut ledger, &children, &weights, 3);
        assert!(notes.iter().any(|n| n.contains("iteration cap")));
        // Partial state, but still conserved.
        assert!((ledger[&id("A")] + ledger[&id("B")] - 8.0).abs() < 1e-9);
    }

    #[test]
    fn settled_state_is_a_no_op() {
        let children = adjacency(&[("", &["100"]), ("100", &["110"])]);
        let mut ledger: Ledger = [(id("100"), 0.0), (id("110"), 7.0)].into();
        let weights: WeightMap = [(id("100"), vec![(id("110"), 1.0)])].into();

        let before = ledger.clone();
        let notes = cascade(&mut ledger, &children, &weights, DEFAULT_MAX_PASSES);
        assert!(notes.is_empty());
        assert_eq!(ledger, before);
    }
}
