//! Offline allocation CLI: read inputs → validate chart → allocate →
//! write CSV or JSON, with notes on stderr.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Flag combination / missing required flags.
    pub const USAGE: i32 = 2;
    /// Unreadable or unparseable input (files, headers, numbers).
    pub const INGEST: i32 = 3;
    /// Chart validation findings in --validate-only mode.
    pub const VALIDATION: i32 = 4;
}

use std::io::Write;
use std::process::ExitCode;

use args::{parse_and_validate, Args};
use ca_core::records::ResultRow;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// File reads, CSV shape, header roles, unparseable amounts/weights.
    Ingest(String),
    /// Chart validation findings under --validate-only.
    Validation,
    /// Output emission failures (CSV/JSON writing).
    Emit(String),
}

fn main() -> ExitCode {
    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("ca: error: {e}");
            return ExitCode::from(exitcodes::USAGE as u8);
        }
    };

    let rc = match run(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            match &e {
                MainError::Ingest(msg) => eprintln!("ca: input error: {msg}"),
                MainError::Emit(msg) => eprintln!("ca: output error: {msg}"),
                MainError::Validation => {}
            }
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Ingest(_) | MainError::Emit(_) => INGEST,
        MainError::Validation => VALIDATION,
    }
}

fn run(args: &Args) -> Result<(), MainError> {
    if args.write_templates {
        ca_io::writer::write_templates(&args.templates_dir)
            .map_err(|e| MainError::Emit(e.to_string()))?;
        if !args.quiet {
            eprintln!(
                "templates written to {}",
                args.templates_dir.display()
            );
        }
        return Ok(());
    }

    // Presence guaranteed by args::validate.
    let (Some(coa_path), Some(costs_path)) = (args.coa.as_ref(), args.costs.as_ref()) else {
        return Err(MainError::Ingest("--coa and --costs are required".to_string()));
    };

    let chart = ca_io::reader::read_chart(coa_path).map_err(ingest)?;
    let costs = ca_io::reader::read_costs(costs_path).map_err(ingest)?;
    let keys = match &args.alloc {
        Some(path) => ca_io::reader::read_keys(path).map_err(ingest)?,
        None => Vec::new(),
    };

    // Findings are advisory unless --validate-only; best-effort allocation
    // over an imperfect chart is an intended mode.
    let report = ca_algo::validate_tree(&chart);
    if !report.valid {
        eprintln!("chart validation findings:");
        for message in &report.messages {
            eprintln!("  - {message}");
        }
    }
    if args.validate_only {
        if report.valid {
            if !args.quiet {
                eprintln!("validate-only: chart OK");
            }
            return Ok(());
        }
        return Err(MainError::Validation);
    }

    let outcome =
        ca_algo::allocate_costs(&chart, &costs, &keys).map_err(|e| MainError::Ingest(e.to_string()))?;
    let notes = outcome.notes;
    let rows: Vec<ResultRow> = if args.keep_zero {
        outcome.rows
    } else {
        // Same suppression rule the result table applies at 2 decimals.
        outcome
            .rows
            .into_iter()
            .filter(|r| (r.amount * 100.0).round() != 0.0)
            .collect()
    };

    if args.json {
        emit_json(args, &rows, &notes)?;
    } else {
        emit_csv(args, &rows)?;
        if !args.quiet && !notes.is_empty() {
            eprintln!("notes:");
            for note in &notes {
                eprintln!("  - {note}");
            }
        }
    }
    Ok(())
}

fn emit_csv(args: &Args, rows: &[ResultRow]) -> Result<(), MainError> {
    match &args.out {
        Some(path) => {
            ca_io::writer::write_results(path, rows).map_err(|e| MainError::Emit(e.to_string()))?;
            if !args.quiet {
                eprintln!("results written to {}", path.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            ca_io::writer::results_to_writer(stdout.lock(), rows)
                .map_err(|e| MainError::Emit(e.to_string()))?;
        }
    }
    Ok(())
}

/// The {result, notes} document (same shape the old upload API answered
/// with); notes travel inside the document instead of stderr.
fn emit_json(args: &Args, rows: &[ResultRow], notes: &[String]) -> Result<(), MainError> {
    let doc = serde_json::json!({ "result": rows, "notes": notes });
    let rendered = serde_json::to_string_pretty(&doc)
        .map_err(|e| MainError::Emit(e.to_string()))?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered + "\n").map_err(|e| MainError::Emit(e.to_string()))?;
            if !args.quiet {
                eprintln!("results written to {}", path.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{rendered}").map_err(|e| MainError::Emit(e.to_string()))?;
        }
    }
    Ok(())
}

fn ingest(e: ca_io::IoError) -> MainError {
    MainError::Ingest(e.to_string())
}
