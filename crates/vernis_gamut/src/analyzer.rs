//! The analysis pipeline: extract, scan, classify, aggregate.

use crate::baseline::{classify, Tier};
use crate::result::{
    AnalysisResult, BaselineAnalysis, BlockReport, ScriptReport, StyleReport, TemplateReport,
};
use crate::scan::{script_features, style_features, template_attributes, template_elements};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use vernis_esquisse::{parse_sfc, ParseOptions, ScriptBlock};

/// Failure outside the analysis itself.
///
/// Structural parse failures are not errors at this level; they produce
/// an [`AnalysisResult::Failure`] record instead.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Baseline analyzer for Vue SFC sources.
///
/// Stateless: every analysis is a pure function of its input, so one
/// analyzer can be shared freely across threads.
#[derive(Debug, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    /// Read and analyze a file.
    ///
    /// A read failure is the only error path; structural parse failures
    /// come back as an [`AnalysisResult::Failure`] record.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult, AnalyzeError> {
        let source = fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.analyze_content(&source, &path.to_string_lossy()))
    }

    /// Analyze SFC source text.
    ///
    /// All-or-nothing: either a fully populated success record or an
    /// error-only failure record, never a partial result.
    pub fn analyze_content(&self, source: &str, filename: &str) -> AnalysisResult {
        let options = ParseOptions {
            filename: filename.to_string(),
        };
        let sketch = match parse_sfc(source, options) {
            Ok(sketch) => sketch,
            Err(err) => {
                tracing::debug!(filename, error = %err, "structural parse failed");
                return AnalysisResult::Failure {
                    filename: filename.to_string(),
                    error: format!("SFC parse error: {err}"),
                };
            }
        };

        let template = sketch.template.as_ref().map(|t| TemplateReport {
            lang: t.lang.as_deref().unwrap_or("html").to_string(),
            elements: template_elements(&t.content),
            attributes: template_attributes(&t.content),
        });
        let script = sketch.script.as_ref().map(script_report);
        let script_setup = sketch.script_setup.as_ref().map(script_report);
        let styles: Vec<StyleReport> = sketch
            .styles
            .iter()
            .map(|s| StyleReport {
                lang: s.lang.as_deref().unwrap_or("css").to_string(),
                scoped: s.scoped,
                module: s.module,
                css_features: style_features(&s.content),
            })
            .collect();

        let blocks = BlockReport {
            template,
            script,
            script_setup,
            styles,
        };
        let analysis = aggregate(&blocks);

        tracing::debug!(
            filename,
            features = analysis.total_features,
            status = %analysis.baseline_status,
            "analysis complete"
        );

        AnalysisResult::Success {
            filename: filename.to_string(),
            blocks,
            analysis,
        }
    }
}

fn script_report(block: &ScriptBlock<'_>) -> ScriptReport {
    ScriptReport {
        lang: block.lang.as_deref().unwrap_or("js").to_string(),
        setup: block.setup,
        js_features: script_features(&block.content),
    }
}

/// Collect all namespaced feature tags, classify each, and fold into
/// the aggregated record. Worst tier wins; an empty tag set is
/// vacuously `widely`.
fn aggregate(blocks: &BlockReport) -> BaselineAnalysis {
    let mut tags: FxHashSet<String> = FxHashSet::default();

    if let Some(template) = &blocks.template {
        for element in &template.elements {
            tags.insert(format!("html-{element}"));
        }
        for attribute in &template.attributes {
            tags.insert(format!("html-attr-{attribute}"));
        }
    }
    for script in [&blocks.script, &blocks.script_setup].into_iter().flatten() {
        for feature in &script.js_features {
            tags.insert(format!("js-{feature}"));
        }
    }
    for style in &blocks.styles {
        for feature in &style.css_features {
            tags.insert(format!("css-{feature}"));
        }
    }

    let mut feature_statuses: BTreeMap<String, Tier> = BTreeMap::new();
    let mut widely_available = Vec::new();
    let mut newly_available = Vec::new();
    let mut not_baseline = Vec::new();

    for tag in tags {
        let tier = classify(&tag);
        match tier {
            Tier::Widely => widely_available.push(tag.clone()),
            Tier::Newly => newly_available.push(tag.clone()),
            Tier::NotBaseline => not_baseline.push(tag.clone()),
        }
        feature_statuses.insert(tag, tier);
    }

    widely_available.sort_unstable();
    newly_available.sort_unstable();
    not_baseline.sort_unstable();

    let baseline_status = feature_statuses
        .values()
        .copied()
        .max()
        .unwrap_or(Tier::Widely);

    BaselineAnalysis {
        total_features: feature_statuses.len(),
        feature_statuses,
        widely_available,
        newly_available,
        not_baseline,
        baseline_status,
    }
}
