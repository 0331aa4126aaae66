//! CLI argument surface: flags, post-parse validation, and stable error
//! messages (handy for scripts/tests).

use clap::Parser;
use std::path::PathBuf;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ca",
    disable_help_subcommand = true,
    about = "Offline cost allocation over a hierarchical chart of accounts"
)]
pub struct Args {
    /// Chart-of-accounts CSV/TXT path.
    #[arg(long)]
    pub coa: Option<PathBuf>,

    /// Input costs CSV/TXT path.
    #[arg(long)]
    pub costs: Option<PathBuf>,

    /// Allocation keys CSV/TXT path (omit to allocate nothing and only
    /// aggregate/report).
    #[arg(long)]
    pub alloc: Option<PathBuf>,

    /// Output path (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Keep rows whose amount rounds to 0.00 (they are dropped by default).
    #[arg(long)]
    pub keep_zero: bool,

    /// Validate the chart of accounts and stop; no allocation.
    #[arg(long)]
    pub validate_only: bool,

    /// Emit a {result, notes} JSON document instead of CSV.
    #[arg(long)]
    pub json: bool,

    /// Write the three sample input CSVs and exit.
    #[arg(long)]
    pub write_templates: bool,

    /// Directory for --write-templates.
    #[arg(long, default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Suppress non-essential stderr output.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation.
#[derive(Debug)]
pub enum CliError {
    Missing(&'static str),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            Missing(s) => write!(f, "missing required flag(s): {s}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Parse from the process arguments and apply the checks clap cannot
/// express (conditional requirements, file existence).
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

/// The post-parse rules: `--write-templates` stands alone; otherwise
/// `--coa` and `--costs` are required and every given input must exist.
pub fn validate(args: Args) -> Result<Args, CliError> {
    if args.write_templates {
        return Ok(args);
    }
    if args.coa.is_none() || args.costs.is_none() {
        return Err(CliError::Missing("--coa and --costs"));
    }
    for path in [&args.coa, &args.costs, &args.alloc].into_iter().flatten() {
        if !path.is_file() {
            return Err(CliError::NotFound(path.display().to_string()));
        }
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("parse")
    }

    #[test]
    fn coa_and_costs_are_required_without_templates_mode() {
        let err = validate(parse(&["ca"])).unwrap_err();
        assert!(matches!(err, CliError::Missing(_)));

        let err = validate(parse(&["ca", "--coa", "chart.csv"])).unwrap_err();
        assert!(matches!(err, CliError::Missing(_)));
    }

    #[test]
    fn write_templates_needs_nothing_else() {
        let args = validate(parse(&["ca", "--write-templates"])).unwrap();
        assert!(args.write_templates);
        assert_eq!(args.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn missing_input_files_are_reported_by_path() {
        let err = validate(parse(&[
            "ca",
            "--coa",
            "/definitely/not/here.csv",
            "--costs",
            "/also/not/here.csv",
        ]))
        .unwrap_err();
        match err {
            CliError::NotFound(p) => assert!(p.contains("not/here.csv")),
            other => panic!("unexpected: {other}"),
        }
    }
}
