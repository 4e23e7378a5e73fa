use std::fs;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::super::args::ScanCommand;
use super::super::exit_status::ExitStatus;
use crate::config::load_config;
use crate::file_scanner::{SourceFile, scan_files};
use crate::report::{FileReport, print_read_warning, print_report, print_summary};
use crate::scan::glob::parse_ignore_patterns;
use crate::scan::{extract_bindings, extract_usages};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let args = &cmd.args;

    let loaded = load_config(&args.path)?;
    if args.verbose && loaded.from_file {
        eprintln!("Using ignore patterns from config file");
    }

    let mut ignores = loaded.config.ignores;
    if let Some(raw) = &args.ignore {
        ignores.extend(parse_ignore_patterns(raw));
    }

    let scan_result = scan_files(&args.path, &ignores, args.verbose);

    // Per-file extraction is pure, so files can be processed in parallel.
    let outcomes: Vec<Result<FileReport, (String, std::io::Error)>> = scan_result
        .files
        .par_iter()
        .map(scan_file)
        .collect();

    let mut reports = Vec::new();
    let mut read_error_count = 0;
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            // A file that cannot be read is reported and skipped; the rest
            // of the scan continues.
            Err((path, err)) => {
                read_error_count += 1;
                if args.verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path,
                        err
                    );
                }
            }
        }
    }

    let total_usages = reports.iter().map(FileReport::usage_count).sum();

    print_report(&reports);
    print_summary(reports.len(), total_usages);
    print_read_warning(read_error_count, args.verbose);
    if scan_result.skipped_count > 0 && !args.verbose {
        eprintln!(
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            scan_result.skipped_count,
            "-v".cyan()
        );
    }

    Ok(ExitStatus::Success)
}

fn scan_file(file: &SourceFile) -> Result<FileReport, (String, std::io::Error)> {
    let text =
        fs::read_to_string(&file.path).map_err(|err| (file.relative.clone(), err))?;

    let bindings = extract_bindings(&text);
    let usages = extract_usages(&text, Some(&bindings));

    Ok(FileReport {
        path: file.relative.clone(),
        usages,
    })
}
