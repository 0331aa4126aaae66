//! Delimited-text readers: sniff the delimiter, map headers to roles,
//! return typed records for the engine.

use std::fs;
use std::path::Path;

use ca_core::records::{AccountRecord, AllocationKeyRecord, CostRecord};

use crate::columns::{
    ACCOUNT_ID_HEADERS, AMOUNT_HEADERS, CHILD_ID_HEADERS, KEY_PARENT_HEADERS, NAME_HEADERS,
    PARENT_ID_HEADERS, WEIGHT_HEADERS,
};
use crate::{IoError, IoResult};

/// How much of the file the delimiter sniffer looks at.
const SNIFF_WINDOW: usize = 2048;

/// Pick the delimiter from `, ; TAB |` by counting occurrences on the first
/// non-empty line of the sample; comma wins ties and empty input.
pub fn sniff_delimiter(sample: &str) -> u8 {
    const CANDIDATES: &[u8] = b",;\t|";
    let line = sample.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut best = b',';
    let mut best_count = 0usize;
    for &cand in CANDIDATES {
        let count = line.bytes().filter(|b| *b == cand).count();
        if count > best_count {
            best = cand;
            best_count = count;
        }
    }
    best
}

fn sniff_window(text: &str) -> &str {
    let mut end = text.len().min(SNIFF_WINDOW);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Find the index of the first header matching any synonym for `role`.
fn role_index(
    headers: &csv::StringRecord,
    synonyms: &'static [&'static str],
    role: &'static str,
) -> IoResult<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    for cand in synonyms {
        if let Some(i) = lowered.iter().position(|h| h == cand) {
            return Ok(i);
        }
    }
    Err(IoError::MissingColumn {
        role,
        accepted: synonyms.join(", "),
    })
}

fn field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

fn open(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(sniff_window(text)))
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// Read chart-of-accounts rows from a file.
pub fn read_chart(path: &Path) -> IoResult<Vec<AccountRecord>> {
    read_chart_str(&fs::read_to_string(path)?)
}

/// Read chart-of-accounts rows from already-loaded text.
pub fn read_chart_str(text: &str) -> IoResult<Vec<AccountRecord>> {
    let mut rdr = open(text);
    let headers = rdr.headers()?.clone();
    let id = role_index(&headers, ACCOUNT_ID_HEADERS, "account_id")?;
    let parent = role_index(&headers, PARENT_ID_HEADERS, "parent_id")?;
    let name = role_index(&headers, NAME_HEADERS, "name")?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        out.push(AccountRecord {
            account_id: field(&record, id),
            parent_id: field(&record, parent),
            name: field(&record, name),
        });
    }
    Ok(out)
}

/// Read cost rows from a file.
pub fn read_costs(path: &Path) -> IoResult<Vec<CostRecord>> {
    read_costs_str(&fs::read_to_string(path)?)
}

/// Read cost rows from already-loaded text.
pub fn read_costs_str(text: &str) -> IoResult<Vec<CostRecord>> {
    let mut rdr = open(text);
    let headers = rdr.headers()?.clone();
    let id = role_index(&headers, ACCOUNT_ID_HEADERS, "account_id")?;
    let amount = role_index(&headers, AMOUNT_HEADERS, "amount")?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        out.push(CostRecord {
            account_id: field(&record, id),
            amount: field(&record, amount),
        });
    }
    Ok(out)
}

/// Read allocation-key rows from a file.
pub fn read_keys(path: &Path) -> IoResult<Vec<AllocationKeyRecord>> {
    read_keys_str(&fs::read_to_string(path)?)
}

/// Read allocation-key rows from already-loaded text.
pub fn read_keys_str(text: &str) -> IoResult<Vec<AllocationKeyRecord>> {
    let mut rdr = open(text);
    let headers = rdr.headers()?.clone();
    let parent = role_index(&headers, KEY_PARENT_HEADERS, "parent_id")?;
    let child = role_index(&headers, CHILD_ID_HEADERS, "child_id")?;
    let weight = role_index(&headers, WEIGHT_HEADERS, "weight")?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        out.push(AllocationKeyRecord {
            parent_id: field(&record, parent),
            child_id: field(&record, child),
            weight: field(&record, weight),
        });
    }
    Ok(out)
}
