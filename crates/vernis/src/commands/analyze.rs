//! Analyze command - Baseline compatibility analysis of .vue files.

use clap::Args;
use glob::glob;
use ignore::Walk;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use vernis_gamut::{generate_report, AnalysisResult, Analyzer, Tier};

#[derive(Args, Default)]
pub struct AnalyzeArgs {
    /// Glob pattern(s) or paths to .vue files
    #[arg(default_value = "./**/*.vue")]
    pub patterns: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Quiet mode - only show the summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Exit code contract: 0 when every analysis succeeds, 1 when any file
/// fails structural parsing or cannot be read.
pub fn run(args: AnalyzeArgs) {
    let start = Instant::now();

    let patterns: Vec<String> = if args.patterns.is_empty() {
        vec!["./**/*.vue".to_string()]
    } else {
        args.patterns.clone()
    };

    let files = collect_vue_files(&patterns);
    if files.is_empty() {
        eprintln!("No .vue files found matching patterns: {patterns:?}");
        return;
    }

    let analyzer = Analyzer::new();
    let read_errors = AtomicUsize::new(0);

    // Per-file analyses share nothing, so run them in parallel.
    let results: Vec<AnalysisResult> = files
        .par_iter()
        .filter_map(|path| match analyzer.analyze_file(path) {
            Ok(result) => Some(result),
            Err(err) => {
                eprintln!("{err}");
                read_errors.fetch_add(1, Ordering::Relaxed);
                None
            }
        })
        .collect();

    let json = args.format == "json";
    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(output) => println!("{output}"),
            Err(err) => eprintln!("Failed to serialize results: {err}"),
        }
    } else if !args.quiet {
        for result in &results {
            print!("{}", generate_report(result));
            println!();
        }
    }

    let parse_failures = results.iter().filter(|r| r.is_failure()).count();
    let failed = parse_failures + read_errors.load(Ordering::Relaxed);

    if !json {
        let elapsed = start.elapsed();
        println!(
            "{}",
            format_summary(&results, failed, files.len())
        );
        println!("Analyzed {} files in {:.4?}", files.len(), elapsed);
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Collect .vue files: glob expansion for wildcard patterns, gitignore
/// aware directory walking for plain paths. `node_modules` is always
/// skipped.
fn collect_vue_files(patterns: &[String]) -> Vec<PathBuf> {
    patterns
        .iter()
        .flat_map(|pattern| {
            if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|entry| entry.ok())
                    .filter(|path| is_vue_file(path))
                    .collect::<Vec<_>>()
            } else {
                Walk::new(pattern)
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| is_vue_file(entry.path()))
                    .map(|entry| entry.path().to_path_buf())
                    .collect::<Vec<_>>()
            }
        })
        .collect()
}

fn is_vue_file(path: &std::path::Path) -> bool {
    path.extension().is_some_and(|ext| ext == "vue")
        && !path.components().any(|c| c.as_os_str() == "node_modules")
}

/// One-line rollup: file count per overall tier plus failures.
fn format_summary(results: &[AnalysisResult], failed: usize, file_count: usize) -> String {
    let mut widely = 0usize;
    let mut newly = 0usize;
    let mut not_baseline = 0usize;
    for result in results {
        match result.analysis().map(|a| a.baseline_status) {
            Some(Tier::Widely) => widely += 1,
            Some(Tier::Newly) => newly += 1,
            Some(Tier::NotBaseline) => not_baseline += 1,
            None => {}
        }
    }

    let mut parts = vec![
        format!("{widely} widely"),
        format!("{newly} newly"),
        format!("{not_baseline} not-baseline"),
    ];
    if failed > 0 {
        parts.push(format!("{failed} failed"));
    }
    format!(
        "{} file{}: {}",
        file_count,
        if file_count == 1 { "" } else { "s" },
        parts.join(", ")
    )
}
