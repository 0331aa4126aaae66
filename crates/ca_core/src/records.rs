//! Raw record shapes at the ingestion boundary, and the final result row.
//!
//! The ingestion layer (`ca_io`) resolves whatever headers/delimiters a file
//! uses into these shapes; the engine never sees raw header text. Amounts
//! and weights stay strings here — `numeric::parse_amount` owns their
//! interpretation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::accounts::AccountId;

/// One chart-of-accounts row. Empty `parent_id` means top-level.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccountRecord {
    pub account_id: String,
    pub parent_id: String,
    pub name: String,
}

/// One cost row. Multiple rows for the same account are additive.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostRecord {
    pub account_id: String,
    pub amount: String,
}

/// One allocation-key row: a weighted edge from a parent to one child.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationKeyRecord {
    pub parent_id: String,
    pub child_id: String,
    pub weight: String,
}

/// One settled output row. Amount is the raw numeric value; fixed-precision
/// formatting is a presentation concern of the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultRow {
    pub account_id: AccountId,
    pub parent_id: AccountId,
    pub name: String,
    pub amount: f64,
}
