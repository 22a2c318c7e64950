//! Script scanner: fixed ES syntax markers.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::into_sorted;

static CLASS_DECL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+\w+").unwrap());

/// Detect the fixed set of ES syntax markers in raw script text.
///
/// Substring presence tests, not lexing: `async` inside a string
/// literal still counts. Returned names are unprefixed; the `js-`
/// namespace is applied at collection.
pub fn script_features(content: &str) -> Vec<String> {
    let mut features: FxHashSet<String> = FxHashSet::default();
    let mut found = |name: &str| {
        features.insert(name.to_string());
    };

    if content.contains("=>") {
        found("arrow-functions");
    }
    if content.contains("async") || content.contains("await") {
        found("async-await");
    }
    if content.contains("const ") || content.contains("let ") {
        found("block-scoping");
    }
    if content.contains("...") {
        found("spread-syntax");
    }
    if content.contains('`') {
        found("template-literals");
    }
    if CLASS_DECL_RE.is_match(content) {
        found("es6-classes");
    }
    if content.contains("import ") || content.contains("export ") {
        found("es6-modules");
    }

    into_sorted(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn async_arrow_const() {
        let features = script_features("const f = async (x) => { await g(x) }");
        assert_eq!(features, ["arrow-functions", "async-await", "block-scoping"]);
    }

    #[test]
    fn spread_and_template_literals() {
        let features = script_features("let xs = [...ys]; let s = `n=${xs.length}`");
        assert_eq!(
            features,
            ["block-scoping", "spread-syntax", "template-literals"]
        );
    }

    #[test]
    fn class_declarations_need_a_name() {
        assert_eq!(script_features("class Foo {}"), ["es6-classes"]);
        // A bare `.class` property access is not a declaration.
        assert!(script_features("el.class").is_empty());
    }

    #[test]
    fn imports_and_exports() {
        let features = script_features("import { ref } from 'vue'\nexport default {}");
        assert_eq!(features, ["es6-modules"]);
    }

    #[test]
    fn markers_are_heuristic_by_contract() {
        // `async` inside a string literal still registers.
        assert_eq!(script_features("var s = \"async\""), ["async-await"]);
    }

    #[test]
    fn empty_script_yields_nothing() {
        assert!(script_features("").is_empty());
    }
}
