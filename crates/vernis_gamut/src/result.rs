//! Analysis result records.
//!
//! One record per analyzed file. The record is a closed sum: either a
//! fully populated success or an error-only failure, never a mix.
//! Everything is owned and serializable; field names serialize in
//! camelCase to match the tool's JSON output format.

use crate::baseline::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terminal record of one file analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisResult {
    /// Structural parse succeeded; blocks and analysis are present.
    #[serde(rename_all = "camelCase")]
    Success {
        filename: String,
        blocks: BlockReport,
        analysis: BaselineAnalysis,
    },
    /// Structural parse failed; only the error message is carried.
    #[serde(rename_all = "camelCase")]
    Failure { filename: String, error: String },
}

impl AnalysisResult {
    /// Filename this record describes.
    pub fn filename(&self) -> &str {
        match self {
            AnalysisResult::Success { filename, .. } => filename,
            AnalysisResult::Failure { filename, .. } => filename,
        }
    }

    /// Whether this is the failure state.
    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisResult::Failure { .. })
    }

    /// Error message, present only in the failure state.
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResult::Failure { error, .. } => Some(error),
            AnalysisResult::Success { .. } => None,
        }
    }

    /// Extracted block reports, present only in the success state.
    pub fn blocks(&self) -> Option<&BlockReport> {
        match self {
            AnalysisResult::Success { blocks, .. } => Some(blocks),
            AnalysisResult::Failure { .. } => None,
        }
    }

    /// Baseline analysis, present only in the success state.
    pub fn analysis(&self) -> Option<&BaselineAnalysis> {
        match self {
            AnalysisResult::Success { analysis, .. } => Some(analysis),
            AnalysisResult::Failure { .. } => None,
        }
    }
}

/// Per-block scan results for one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockReport {
    pub template: Option<TemplateReport>,
    pub script: Option<ScriptReport>,
    pub script_setup: Option<ScriptReport>,
    pub styles: Vec<StyleReport>,
}

/// Template block scan result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateReport {
    /// Markup dialect (`html` unless the block says otherwise).
    pub lang: String,
    /// Lower-cased element names, lexicographic.
    pub elements: Vec<String>,
    /// Lower-cased attribute names, lexicographic, Vue bindings excluded.
    pub attributes: Vec<String>,
}

/// Script block scan result (plain or setup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptReport {
    /// Script dialect (`js` unless the block says otherwise).
    pub lang: String,
    /// Whether this is a `<script setup>` block.
    pub setup: bool,
    /// Detected ES syntax markers, lexicographic.
    pub js_features: Vec<String>,
}

/// Style block scan result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleReport {
    /// Style dialect (`css` unless the block says otherwise).
    pub lang: String,
    /// Whether the block is scoped.
    pub scoped: bool,
    /// Whether the block is a CSS module.
    pub module: bool,
    /// Detected CSS feature markers, lexicographic.
    pub css_features: Vec<String>,
}

/// Aggregated Baseline classification for one file.
///
/// Invariants: the three partitions are pairwise disjoint, their union
/// equals the key set of `feature_statuses`, and `baseline_status` is
/// the worst tier present (`Widely` when no features were detected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineAnalysis {
    /// Number of distinct feature tags detected.
    pub total_features: usize,
    /// Every detected tag mapped to its tier, ordered by tag.
    pub feature_statuses: BTreeMap<String, Tier>,
    /// Tags classified `widely`, lexicographic.
    pub widely_available: Vec<String>,
    /// Tags classified `newly`, lexicographic.
    pub newly_available: Vec<String>,
    /// Tags classified `not-baseline`, lexicographic.
    pub not_baseline: Vec<String>,
    /// Worst tier present across all detected tags.
    pub baseline_status: Tier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_with_status_tag() {
        let failure = AnalysisResult::Failure {
            filename: "Broken.vue".to_string(),
            error: "SFC parse error: boom".to_string(),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["filename"], "Broken.vue");
        assert!(json.get("blocks").is_none());
    }

    #[test]
    fn camel_case_field_names() {
        let analysis = BaselineAnalysis {
            total_features: 1,
            feature_statuses: [("css-grid".to_string(), Tier::Newly)].into_iter().collect(),
            widely_available: vec![],
            newly_available: vec!["css-grid".to_string()],
            not_baseline: vec![],
            baseline_status: Tier::Newly,
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("totalFeatures").is_some());
        assert!(json.get("featureStatuses").is_some());
        assert!(json.get("newlyAvailable").is_some());
        assert_eq!(json["baselineStatus"], "newly");
    }

    #[test]
    fn accessors_match_the_variant() {
        let failure = AnalysisResult::Failure {
            filename: "a.vue".to_string(),
            error: "x".to_string(),
        };
        assert!(failure.is_failure());
        assert_eq!(failure.error(), Some("x"));
        assert!(failure.blocks().is_none());
        assert!(failure.analysis().is_none());
        assert_eq!(failure.filename(), "a.vue");
    }
}
