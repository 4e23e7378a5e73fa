//! Report formatting and printing utilities.
//!
//! Separate from the scanning logic so tagscan can be used as a library
//! without printing side effects.

use colored::Colorize;

use crate::scan::UsageIndex;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Per-file scan results ready for printing.
pub struct FileReport {
    /// Root-relative path.
    pub path: String,
    pub usages: UsageIndex,
}

impl FileReport {
    pub fn usage_count(&self) -> usize {
        self.usages.values().map(Vec::len).sum()
    }
}

/// Print tag usages grouped per file.
///
/// Files without usages are skipped. Tag names are sorted per file for
/// deterministic output; usages under a name keep discovery order.
pub fn print_report(reports: &[FileReport]) {
    for report in reports {
        if report.usages.is_empty() {
            continue;
        }

        println!("{}", report.path.bold());

        let mut names: Vec<&String> = report.usages.keys().collect();
        names.sort();

        // Line number alignment across the whole file block.
        let max_line_width = report
            .usages
            .values()
            .flatten()
            .map(|u| u.line.to_string().len())
            .max()
            .unwrap_or(1);

        for name in names {
            let usages = &report.usages[name];
            println!(
                "  {} {}",
                format!("<{}>", name).cyan(),
                format!(
                    "({} usage{})",
                    usages.len(),
                    if usages.len() == 1 { "" } else { "s" }
                )
                .dimmed()
            );

            // All usages of a name share the same origin statement.
            if let Some(origin) = usages.iter().find_map(|u| u.origin.as_deref()) {
                println!(
                    "  {:>width$} {} {} {}",
                    "",
                    "=".blue(),
                    "from:".bold(),
                    origin,
                    width = max_line_width
                );
            }

            for usage in usages {
                println!(
                    "  {:>width$} {} {}",
                    usage.line.to_string().blue(),
                    "|".blue(),
                    usage.line_text,
                    width = max_line_width
                );
            }
        }

        println!(); // Empty line between files
    }
}

/// Print the end-of-scan summary line.
pub fn print_summary(source_files: usize, total_usages: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} source {} - {} tag usage{} found",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            total_usages,
            if total_usages == 1 { "" } else { "s" }
        )
        .green()
    );
}

/// Print a warning about files that could not be read.
///
/// Shown at the end of a scan when files were skipped.
pub fn print_read_warning(read_error_count: usize, verbose: bool) {
    if read_error_count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            read_error_count,
            "-v".cyan()
        );
    }
}
