//! Structural validation of the chart of accounts.
//!
//! All problems come back as data — duplicates, dangling parents, cycles —
//! never as errors, so callers can choose between aborting and best-effort
//! allocation. The traversal is seeded from *every* distinct parent value
//! (plus the root marker): accounts disconnected from the nominal root, such
//! as a detached two-node loop, must still be covered.

use std::collections::{BTreeMap, BTreeSet};

use ca_core::{records::AccountRecord, AccountId};

/// Outcome of a validation pass. An empty message list implies `valid`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeReport {
    pub valid: bool,
    pub messages: Vec<String>,
}

/// Check that the account set forms a valid forest: unique ids, every
/// non-empty parent id names an existing account, no cycles.
pub fn validate_tree(records: &[AccountRecord]) -> TreeReport {
    let mut messages: Vec<String> = Vec::new();

    let ids: Vec<AccountId> = records
        .iter()
        .map(|r| AccountId::new(&r.account_id))
        .collect();
    let parents: Vec<AccountId> = records
        .iter()
        .map(|r| AccountId::new(&r.parent_id))
        .collect();

    // Duplicate ids: report every id seen more than once, sorted.
    let mut counts: BTreeMap<&AccountId, usize> = BTreeMap::new();
    for id in &ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    let dups: Vec<&str> = counts
        .iter()
        .filter(|(_, &n)| n > 1)
        .map(|(id, _)| id.as_str())
        .collect();
    if !dups.is_empty() {
        messages.push(format!("duplicate account ids: {}", dups.join(", ")));
    }

    // Dangling parents: non-empty parent ids with no matching account,
    // aggregated into one sorted list.
    let id_set: BTreeSet<&AccountId> = ids.iter().collect();
    let dangling: BTreeSet<&str> = parents
        .iter()
        .filter(|p| !p.is_root() && !id_set.contains(p))
        .map(AccountId::as_str)
        .collect();
    if !dangling.is_empty() {
        messages.push(format!(
            "parent ids not present in the chart of accounts: {}",
            dangling.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    // Cycles over parent→child edges.
    let mut children: BTreeMap<AccountId, Vec<AccountId>> = BTreeMap::new();
    for (id, parent) in ids.iter().zip(&parents) {
        children.entry(parent.clone()).or_default().push(id.clone());
    }
    let root = AccountId::root();
    let mut seeds: BTreeSet<&AccountId> = parents.iter().collect();
    seeds.insert(&root);
    if has_cycle(&children, &seeds) {
        messages.push("cycle detected in the account hierarchy".to_string());
    }

    TreeReport {
        valid: messages.is_empty(),
        messages,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Three-color depth-first search with an explicit stack; a cycle is any
/// edge reaching an in-progress node. Iterative on purpose: recursion depth
/// would track chart depth.
fn has_cycle(
    children: &BTreeMap<AccountId, Vec<AccountId>>,
    seeds: &BTreeSet<&AccountId>,
) -> bool {
    let mut marks: BTreeMap<&AccountId, Mark> = BTreeMap::new();
    let mark_of =
        |marks: &BTreeMap<&AccountId, Mark>, id: &AccountId| -> Mark {
            marks.get(id).copied().unwrap_or(Mark::Unvisited)
        };

    for &seed in seeds {
        if mark_of(&marks, seed) != Mark::Unvisited {
            continue;
        }
        marks.insert(seed, Mark::InProgress);
        // frame: (node, index of the next child to visit)
        let mut stack: Vec<(&AccountId, usize)> = vec![(seed, 0)];

        while let Some(&(node, next)) = stack.last() {
            let kids = children.get(node).map(Vec::as_slice).unwrap_or_default();
            if next >= kids.len() {
                marks.insert(node, Mark::Done);
                stack.pop();
                continue;
            }
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            let child = &kids[next];
            match mark_of(&marks, child) {
                Mark::InProgress => return true,
                Mark::Done => {}
                Mark::Unvisited => {
                    marks.insert(child, Mark::InProgress);
                    stack.push((child, 0));
                }
            }
        }
    }
    false
}
