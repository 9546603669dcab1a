// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

mod data;
mod record;

use data::{DensityReport, Scanner};

#[derive(Parser, Debug)]
#[command(name = "drap-doctor")]
#[command(about = "Diagnostic CLI for checking DRAP solar-activity feed density")]
struct Args {
    /// Path to the stats file (one `<epoch> : <min> <max> <mean>` record per line)
    stats_file: PathBuf,

    /// Reference "now" timestamp in unix seconds (defaults to the wall clock)
    #[arg(long)]
    now: Option<i64>,

    /// Export the populated bin series and summary to a JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

/// Exit code for a failed argument parse.
///
/// Bad arguments must exit with code 1, not clap's default 2, while
/// `--help` and `--version` are not errors at all.
fn parse_exit_code(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(parse_exit_code(&e));
        }
    };

    let now = match args.now {
        Some(now) => now,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64,
    };

    let file = match File::open(&args.stats_file) {
        Ok(file) => file,
        Err(_) => {
            eprintln!("Cannot open file");
            process::exit(1);
        }
    };

    let mut scanner = Scanner::new(now);
    scanner.scan(BufReader::new(file))?;

    let report = scanner.report();
    println!("{report}");

    if let Some(ref export_path) = args.export {
        export_to_file(&scanner, &report, export_path)?;
    }

    Ok(())
}

/// Export the populated bin series and summary to a JSON file.
fn export_to_file(scanner: &Scanner, report: &DensityReport, export_path: &Path) -> Result<()> {
    let export = report.export_document(scanner.cache());

    let json = serde_json::to_string_pretty(&export)?;
    let mut file = File::create(export_path)?;
    file.write_all(json.as_bytes())?;

    println!("Exported bin series to: {}", export_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_exits_zero_and_bad_args_exit_one() {
        let help = Args::try_parse_from(["drap-doctor", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&help), 0);

        let missing = Args::try_parse_from(["drap-doctor"]).unwrap_err();
        assert_eq!(parse_exit_code(&missing), 1);

        let extra = Args::try_parse_from(["drap-doctor", "a.txt", "b.txt"]).unwrap_err();
        assert_eq!(parse_exit_code(&extra), 1);
    }
}
