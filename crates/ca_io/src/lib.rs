//! ca_io — the ingestion/emission collaborator around the engine.
//!
//! Real chart/cost/key exports disagree on delimiters and header naming,
//! so this crate owns delimiter sniffing and fuzzy header-to-role matching
//! and hands the engine nothing but already-mapped records. The engine
//! never sees raw header text.
//!
//! Shared error type (`IoError`) with `From` conversions used across
//! modules; public surface kept small.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod columns;
pub mod reader;
pub mod writer;

/// Unified error for ca_io (readers, writers, templates).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem errors (open, create_dir_all, write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input (ragged rows, quoting, encoding).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// No header matched a required column role.
    #[error("missing required column for '{role}'; accepted headers: {accepted}")]
    MissingColumn {
        role: &'static str,
        accepted: String,
    },
}

pub type IoResult<T> = Result<T, IoError>;
