//! Result and template writers. Amounts are fixed to six decimals here;
//! the engine itself never rounds.

use std::fs;
use std::io::Write;
use std::path::Path;

use ca_core::records::ResultRow;

use crate::IoResult;

const RESULT_HEADER: [&str; 4] = ["account_id", "parent_id", "name", "amount"];

/// Write settled rows as CSV to `path`.
pub fn write_results(path: &Path, rows: &[ResultRow]) -> IoResult<()> {
    let file = fs::File::create(path)?;
    results_to_writer(file, rows)
}

/// Write settled rows as CSV to any writer (stdout included).
pub fn results_to_writer<W: Write>(writer: W, rows: &[ResultRow]) -> IoResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(RESULT_HEADER)?;
    for row in rows {
        let amount = format!("{:.6}", row.amount);
        out.write_record([
            row.account_id.as_str(),
            row.parent_id.as_str(),
            row.name.as_str(),
            amount.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write the three sample input files into `dir` (created if missing):
/// a five-account chart, one cost row, and a two-level key set.
pub fn write_templates(dir: &Path) -> IoResult<()> {
    fs::create_dir_all(dir)?;

    write_rows(
        &dir.join("template_coa.csv"),
        ["account_id", "parent_id", "name"],
        &[
            ["100", "", "Overheads"],
            ["110", "100", "Office"],
            ["120", "100", "IT"],
            ["121", "120", "Helpdesk"],
            ["122", "120", "Infrastructure"],
        ],
    )?;
    write_rows(
        &dir.join("template_costs.csv"),
        ["account_id", "amount"],
        &[["100", "100000"]],
    )?;
    write_rows(
        &dir.join("template_keys.csv"),
        ["parent_id", "child_id", "weight"],
        &[
            ["100", "110", "0.4"],
            ["100", "120", "0.6"],
            ["120", "121", "0.3"],
            ["120", "122", "0.7"],
        ],
    )?;
    Ok(())
}

fn write_rows<const N: usize>(
    path: &Path,
    header: [&str; N],
    rows: &[[&str; N]],
) -> IoResult<()> {
    let mut out = csv::Writer::from_writer(fs::File::create(path)?);
    out.write_record(header)?;
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}
