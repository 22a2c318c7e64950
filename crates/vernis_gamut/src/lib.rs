//! # vernis_gamut
//!
//! Gamut - Baseline feature scanning and classification for Vue SFCs.
//!
//! ## Name Origin
//!
//! **Gamut** (/ˈɡæmət/) is the range of colors a device or medium can
//! actually reproduce. A pigment outside the gamut cannot be rendered
//! faithfully everywhere; a web-platform feature outside Baseline
//! cannot either. `vernis_gamut` measures where each feature used by a
//! component sits within that range.
//!
//! ## Pipeline
//!
//! ```text
//! source ─> vernis_esquisse (block split)
//!        ─> scanners (html / script / style, heuristic patterns)
//!        ─> classifier (static Baseline tier tables)
//!        ─> AnalysisResult (aggregated record)
//!        ─> generate_report (text rendering)
//! ```
//!
//! The scanners are deliberately shallow substring/regex predicates, not
//! lexers: a string literal containing `async` counts as `async-await`.
//! That heuristic vocabulary is what the classifier tables are curated
//! against, so it is part of the contract.
//!
//! ## Usage
//!
//! ```
//! use vernis_gamut::{Analyzer, Tier};
//!
//! let source = r#"<template><div class="a"><span>{{ x }}</span></div></template>"#;
//! let result = Analyzer::new().analyze_content(source, "App.vue");
//! assert_eq!(result.analysis().unwrap().baseline_status, Tier::Widely);
//! ```

mod analyzer;
pub mod baseline;
mod report;
mod result;
pub mod scan;

pub use analyzer::{Analyzer, AnalyzeError};
pub use baseline::{classify, Tier};
pub use report::generate_report;
pub use result::{AnalysisResult, BaselineAnalysis, BlockReport, ScriptReport, StyleReport, TemplateReport};

/// Analyze an SFC source with a default [`Analyzer`].
///
/// Convenience for simple use cases; construct an [`Analyzer`] directly
/// when analyzing many files.
pub fn analyze(source: &str, filename: &str) -> AnalysisResult {
    Analyzer::new().analyze_content(source, filename)
}
