//! ca_core — Core types for the cost-allocation engine.
//!
//! This crate is **I/O-free**. It defines the stable types and rules shared
//! across the workspace (`ca_algo`, `ca_io`, `ca_cli`):
//!
//! - `AccountId` and the empty-string root marker
//! - `Account`, `ChartOfAccounts`, and the derived children-of adjacency
//! - raw record shapes handed over by the ingestion layer
//! - the numeric normalization rule for amount/weight strings
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod accounts;
pub mod numeric;
pub mod records;

pub use accounts::{Account, AccountId, ChartOfAccounts};
pub use numeric::parse_amount;
pub use records::{AccountRecord, AllocationKeyRecord, CostRecord, ResultRow};

pub mod errors {
    use std::fmt;

    /// Minimal error set for core-domain parsing.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// An amount/weight string that still fails to parse after
        /// normalization. Carries the raw offending value.
        BadNumber(String),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::BadNumber(raw) => write!(f, "invalid number: '{raw}'"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub use errors::CoreError;
