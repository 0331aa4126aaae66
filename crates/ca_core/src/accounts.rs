//! Account identity, the chart of accounts, and the derived adjacency.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::records::AccountRecord;

/// Trimmed account identifier. The empty string is the root marker
/// ("no parent"); it never names an account of its own.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccountId(String);

impl AccountId {
    /// Build an id from raw text, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The root marker (empty string).
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One account in the chart. `parent_id` is the root marker for top-level
/// accounts; `name` is informational only.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Account {
    pub account_id: AccountId,
    pub parent_id: AccountId,
    pub name: String,
}

/// The hierarchical account set. Kept in input order; the adjacency is
/// derived on demand and never persisted independently.
#[derive(Clone, Debug, Default)]
pub struct ChartOfAccounts {
    pub accounts: Vec<Account>,
}

impl ChartOfAccounts {
    /// Build from raw ingestion records, trimming ids and names.
    pub fn from_records(records: &[AccountRecord]) -> Self {
        let accounts = records
            .iter()
            .map(|r| Account {
                account_id: AccountId::new(&r.account_id),
                parent_id: AccountId::new(&r.parent_id),
                name: r.name.trim().to_string(),
            })
            .collect();
        Self { accounts }
    }

    /// Children-of adjacency: parent id (root marker included) → direct
    /// children in chart order.
    pub fn children_of(&self) -> BTreeMap<AccountId, Vec<AccountId>> {
        let mut children: BTreeMap<AccountId, Vec<AccountId>> = BTreeMap::new();
        for a in &self.accounts {
            children
                .entry(a.parent_id.clone())
                .or_default()
                .push(a.account_id.clone());
        }
        children
    }

    /// Lookup index by account id. On duplicate ids the first occurrence
    /// wins; duplicates are the validator's business, not this index's.
    pub fn index(&self) -> BTreeMap<&AccountId, &Account> {
        let mut idx = BTreeMap::new();
        for a in &self.accounts {
            idx.entry(&a.account_id).or_insert(a);
        }
        idx
    }
}
