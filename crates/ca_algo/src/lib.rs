//! ca_algo — the allocation engine proper
//! (validate → build ledger → normalize weights → cascade → assemble).
//!
//! This crate is I/O-free and deterministic: all maps iterate in id order,
//! per-parent child lists keep input order, and two runs over identical
//! inputs produce identical rows and identical note sequences.
//!
//! The validator is deliberately *not* called from the allocation path:
//! "validate-only" and "best-effort allocate without validation" are both
//! real caller modes, so the check stays an independent capability.

#![forbid(unsafe_code)]

pub mod assemble;
pub mod cascade;
pub mod ledger;
pub mod validate;
pub mod weights;

use ca_core::{
    records::{AccountRecord, AllocationKeyRecord, CostRecord, ResultRow},
    ChartOfAccounts, CoreError,
};

pub use validate::{validate_tree, TreeReport};

/// Settled rows plus the diagnostic notes collected while cascading.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationOutcome {
    pub rows: Vec<ResultRow>,
    pub notes: Vec<String>,
}

/// End-to-end allocation with the default pass cap.
///
/// Structural tree problems are *not* re-checked here; run
/// [`validate_tree`] first wherever malformed charts are possible.
/// The only hard failure is an unparseable amount or weight.
pub fn allocate_costs(
    chart: &[AccountRecord],
    costs: &[CostRecord],
    keys: &[AllocationKeyRecord],
) -> Result<AllocationOutcome, CoreError> {
    allocate_costs_capped(chart, costs, keys, cascade::DEFAULT_MAX_PASSES)
}

/// End-to-end allocation with an explicit pass cap (safety net for
/// malformed input; any acyclic chart settles within its depth).
pub fn allocate_costs_capped(
    chart: &[AccountRecord],
    costs: &[CostRecord],
    keys: &[AllocationKeyRecord],
    max_passes: usize,
) -> Result<AllocationOutcome, CoreError> {
    let chart = ChartOfAccounts::from_records(chart);
    let children = chart.children_of();

    let mut pending = ledger::build_ledger(&chart, costs)?;
    let weight_map = weights::normalize_weights(keys, &children)?;
    let notes = cascade::cascade(&mut pending, &children, &weight_map, max_passes);
    let rows = assemble::assemble(&chart, &pending);

    Ok(AllocationOutcome { rows, notes })
}
