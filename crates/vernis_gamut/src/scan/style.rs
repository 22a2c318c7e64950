//! Style scanner: fixed CSS feature markers.

use rustc_hash::FxHashSet;

use super::into_sorted;

/// Detect the fixed set of CSS feature markers in raw style text.
///
/// Substring presence tests over the raw block, preprocessor syntax and
/// all. Returned names are unprefixed; the `css-` namespace is applied
/// at collection.
pub fn style_features(content: &str) -> Vec<String> {
    let mut features: FxHashSet<String> = FxHashSet::default();
    let mut found = |name: &str| {
        features.insert(name.to_string());
    };

    if content.contains("grid") {
        found("grid");
    }
    if content.contains("flex") {
        found("flexbox");
    }
    if content.contains("var(") {
        found("custom-properties");
    }
    if content.contains("@media") {
        found("media-queries");
    }
    if content.contains("transform") {
        found("transforms");
    }
    if content.contains("transition") || content.contains("animation") {
        found("transitions");
    }
    if content.contains("calc(") {
        found("calc");
    }

    into_sorted(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_custom_properties() {
        let features = style_features(".a { display: grid; gap: 1rem; background: var(--x); }");
        assert_eq!(features, ["custom-properties", "grid"]);
    }

    #[test]
    fn flex_media_transform() {
        let css = "@media (max-width: 768px) { .b { display: flex; transform: none; } }";
        assert_eq!(
            style_features(css),
            ["flexbox", "media-queries", "transforms"]
        );
    }

    #[test]
    fn transitions_cover_animation_too() {
        assert_eq!(style_features(".c { animation: spin 1s; }"), ["transitions"]);
        assert_eq!(
            style_features(".c { transition: all 0.3s; }"),
            ["transitions"]
        );
    }

    #[test]
    fn calc_requires_the_open_paren() {
        assert_eq!(style_features("width: calc(100% - 2rem);"), ["calc"]);
        assert!(style_features(".calculated { }").is_empty());
    }

    #[test]
    fn markers_are_substring_tests() {
        // `grid-area` in a comment still registers; this is contractual.
        assert_eq!(style_features("/* grid-area */"), ["grid"]);
    }

    #[test]
    fn empty_style_yields_nothing() {
        assert!(style_features("").is_empty());
    }
}
