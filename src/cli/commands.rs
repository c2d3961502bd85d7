use crate::core::compare_files;
use crate::error::{CompareError, CompareResult};
use crate::types::{CompareConfig, ComparisonReport};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// How each comparison is reported on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per file pair
    Json,
}

/// Expand file patterns into concrete paths, in pattern order.
///
/// Matches of a single pattern come back sorted by path. A pattern without
/// glob metacharacters is kept as a literal path, existing or not.
pub fn expand_globs(patterns: &[String]) -> CompareResult<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let matches = glob::glob(pattern).map_err(|source| CompareError::GlobPattern {
            pattern: pattern.clone(),
            source,
        })?;

        let before = paths.len();
        for entry in matches {
            paths.push(entry?);
        }
        debug!("'{}' matched {} files", pattern, paths.len() - before);
    }

    Ok(paths)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Both sides need files, and the same number of them
pub fn validate_file_lists<T>(files_a: &[T], files_b: &[T]) -> CompareResult<()> {
    if files_a.is_empty() || files_b.is_empty() {
        return Err(CompareError::Configuration(
            "Must specify at least one file for each side".to_string(),
        ));
    }
    if files_a.len() != files_b.len() {
        return Err(CompareError::Configuration(format!(
            "Length of files to compare don't match: {} vs {}",
            files_a.len(),
            files_b.len()
        )));
    }
    Ok(())
}

/// Execute a comparison run: pair the A and B files by position and compare
/// the configured sheet of each pair, reporting as it goes.
///
/// The first failing pair ends the run.
pub fn compare(
    files_a: Vec<String>,
    files_b: Vec<String>,
    config: &CompareConfig,
    format: OutputFormat,
) -> CompareResult<Vec<ComparisonReport>> {
    config.validate()?;
    validate_file_lists(&files_a, &files_b)?;

    let paths_a = expand_globs(&files_a)?;
    let paths_b = expand_globs(&files_b)?;
    validate_file_lists(&paths_a, &paths_b)?;

    let mut reports = Vec::with_capacity(paths_a.len());

    for (file_a, file_b) in paths_a.into_iter().zip(paths_b) {
        if format == OutputFormat::Text {
            println!(
                "{} {} with {}",
                "comparing".bold(),
                file_a.display(),
                file_b.display()
            );
        }

        let result = compare_files(&file_a, &file_b, &config.sheet, &config.sheet, config)?;

        let report = ComparisonReport {
            file_a,
            file_b,
            sheet: config.sheet.clone(),
            differences: result.differences,
            annotated: result.annotated,
        };

        match format {
            OutputFormat::Text => print_report(&report, config.print_diff),
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }

        reports.push(report);
    }

    Ok(reports)
}

fn print_report(report: &ComparisonReport, print_diff: bool) {
    if report.is_identical() {
        println!("{}", "Files were the same".green());
    } else if print_diff {
        for diff in &report.differences {
            println!("{}", diff.to_string().yellow());
        }
    } else {
        println!(
            "{}",
            format!(
                "found {} differences in '{}'",
                report.differences.len(),
                report.sheet
            )
            .yellow()
        );
    }

    if let Some(annotated) = &report.annotated {
        println!("   Highlighted copy: {}", annotated.display());
    }
}
