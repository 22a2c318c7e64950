//! Human-readable report rendering.

use crate::result::{AnalysisResult, ScriptReport, StyleReport};
use std::fmt::Write;

/// Render an [`AnalysisResult`] as a multi-section text report.
///
/// Pure function of the record; output is byte-deterministic. Failure
/// records render as a single error line with no other sections.
pub fn generate_report(result: &AnalysisResult) -> String {
    let (filename, blocks, analysis) = match result {
        AnalysisResult::Failure { error, .. } => return format!("error: {error}\n"),
        AnalysisResult::Success {
            filename,
            blocks,
            analysis,
        } => (filename, blocks, analysis),
    };

    let mut out = String::new();
    let _ = writeln!(out, "=== SFC Baseline report: {filename} ===");

    if let Some(template) = &blocks.template {
        let _ = writeln!(out);
        let _ = writeln!(out, "Template ({}):", template.lang);
        let _ = writeln!(out, "  elements: {}", template.elements.join(", "));
        let _ = writeln!(out, "  attributes: {}", template.attributes.join(", "));
    }

    if let Some(script) = &blocks.script {
        script_section(&mut out, "Script", script);
    }
    if let Some(script) = &blocks.script_setup {
        script_section(&mut out, "Script setup", script);
    }

    for (index, style) in blocks.styles.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Style {} ({}):",
            index + 1,
            style_qualifiers(style)
        );
        let _ = writeln!(out, "  features: {}", style.css_features.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Baseline summary:");
    let _ = writeln!(out, "  overall: {}", analysis.baseline_status);
    let _ = writeln!(out, "  features detected: {}", analysis.total_features);
    let _ = writeln!(out, "  widely available: {}", analysis.widely_available.len());
    let _ = writeln!(out, "  newly available: {}", analysis.newly_available.len());
    let _ = writeln!(out, "  not baseline: {}", analysis.not_baseline.len());

    if !analysis.not_baseline.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Not baseline features:");
        for tag in &analysis.not_baseline {
            let _ = writeln!(out, "  - {tag}");
        }
    }

    out
}

fn script_section(out: &mut String, title: &str, script: &ScriptReport) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title} ({}):", script.lang);
    let _ = writeln!(out, "  features: {}", script.js_features.join(", "));
}

fn style_qualifiers(style: &StyleReport) -> String {
    let mut qualifiers = style.lang.clone();
    if style.scoped {
        qualifiers.push_str(", scoped");
    }
    if style.module {
        qualifiers.push_str(", module");
    }
    qualifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Analyzer;

    #[test]
    fn failure_renders_a_single_error_line() {
        let result = AnalysisResult::Failure {
            filename: "Broken.vue".to_string(),
            error: "SFC parse error: <style> block is never closed".to_string(),
        };
        insta::assert_snapshot!(
            generate_report(&result),
            @"error: SFC parse error: <style> block is never closed"
        );
    }

    #[test]
    fn full_report_sections() {
        let source = "<template><div class=\"a\"><span>{{ x }}</span></div></template>\n\
                      <script setup>const f = async () => ({ ...x })</script>\n\
                      <style scoped>.a { display: grid; color: var(--c); transition: all 1s; }</style>";
        let result = Analyzer::new().analyze_content(source, "Sample.vue");
        insta::assert_snapshot!(generate_report(&result), @r"
        === SFC Baseline report: Sample.vue ===

        Template (html):
          elements: div, span
          attributes: class

        Script setup (js):
          features: arrow-functions, async-await, block-scoping, spread-syntax

        Style 1 (css, scoped):
          features: custom-properties, grid, transitions

        Baseline summary:
          overall: not-baseline
          features detected: 10
          widely available: 5
          newly available: 4
          not baseline: 1

        Not baseline features:
          - css-transitions
        ");
    }

    #[test]
    fn empty_document_report_is_just_the_summary() {
        let result = Analyzer::new().analyze_content("", "Empty.vue");
        insta::assert_snapshot!(generate_report(&result), @r"
        === SFC Baseline report: Empty.vue ===

        Baseline summary:
          overall: widely
          features detected: 0
          widely available: 0
          newly available: 0
          not baseline: 0
        ");
    }

    #[test]
    fn report_is_deterministic() {
        let source = "<style>.a { transform: none; display: flex; }</style>";
        let analyzer = Analyzer::new();
        let a = generate_report(&analyzer.analyze_content(source, "x.vue"));
        let b = generate_report(&analyzer.analyze_content(source, "x.vue"));
        assert_eq!(a, b);
    }

    #[test]
    fn not_baseline_listing_only_when_nonzero() {
        let source = "<template><p>hi</p></template>";
        let result = Analyzer::new().analyze_content(source, "p.vue");
        let report = generate_report(&result);
        assert!(!report.contains("Not baseline features"));
    }
}
