//! Amount/weight string normalization.
//!
//! Ledger exports commonly carry locale artifacts: internal spaces as
//! thousands separators and a comma decimal separator. The rule here is the
//! single normalization applied anywhere a raw amount or weight enters the
//! engine; a value that still fails to parse afterwards is a hard error for
//! the whole operation (silently zeroing it would corrupt cascading totals).

use crate::errors::CoreError;

/// Parse a raw amount/weight string:
/// trim → empty means 0.0 → strip internal spaces → comma becomes period →
/// parse as `f64`.
pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .map_err(|_| CoreError::BadNumber(raw.to_string()))
}
