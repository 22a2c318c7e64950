//! Template scanner: HTML element and attribute extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::into_sorted;

/// An opening tag name: `<` followed by word characters, delimited by
/// whitespace or `>`.
static ELEMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(\w+)(?:\s|>)").unwrap());

/// An opening tag with its attribute region captured.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\w+([^>]*)>").unwrap());

/// An attribute name within a tag: whitespace, then a word, delimited
/// by `=`, whitespace or `>`.
static ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s([\w-]+)(?:=|[\s>])").unwrap());

/// Extract lower-cased element names from raw template markup.
pub fn template_elements(content: &str) -> Vec<String> {
    let mut elements = FxHashSet::default();
    for captures in ELEMENT_RE.captures_iter(content) {
        elements.insert(captures[1].to_ascii_lowercase());
    }
    into_sorted(elements)
}

/// Extract lower-cased attribute names from raw template markup.
///
/// Only opening-tag regions are scanned, so mustache interpolation text
/// never contributes attribute names. Vue binding syntax is excluded:
/// the directive prefix `v-`, the bind shorthand `:` and the event
/// shorthand `@` are framework syntax, not HTML.
pub fn template_attributes(content: &str) -> Vec<String> {
    let mut attributes = FxHashSet::default();
    for tag in TAG_RE.captures_iter(content) {
        // Re-terminate the region so a trailing boolean attribute still
        // matches the delimiter.
        let region = format!("{}>", &tag[1]);
        for captures in ATTR_RE.captures_iter(&region) {
            let attr = captures[1].to_ascii_lowercase();
            if attr.starts_with("v-") || attr.starts_with(':') || attr.starts_with('@') {
                continue;
            }
            attributes.insert(attr);
        }
    }
    into_sorted(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_are_collected_and_lowercased() {
        let elements = template_elements("<Div class=\"a\"><SPAN>{{ x }}</SPAN></Div>");
        assert_eq!(elements, ["div", "span"]);
    }

    #[test]
    fn duplicate_elements_collapse() {
        let elements = template_elements("<p>a</p><p>b</p><p>c</p>");
        assert_eq!(elements, ["p"]);
    }

    #[test]
    fn ordinary_attributes_are_collected() {
        let attributes = template_attributes(r#"<div class="a" id="b"><h1 style="x">t</h1></div>"#);
        assert_eq!(attributes, ["class", "id", "style"]);
    }

    #[test]
    fn vue_bindings_are_excluded() {
        let attributes = template_attributes(
            r#"<article v-for="item in items" :key="item.id" @click="go" class="card">x</article>"#,
        );
        assert!(attributes.contains(&"class".to_string()));
        for binding in ["v-for", "key", "click"] {
            assert!(!attributes.contains(&binding.to_string()), "{binding} leaked");
        }
    }

    #[test]
    fn quoted_values_with_spaces_overcount() {
        // Known heuristic: words inside a spaced attribute value can
        // register as attribute names. This stays as-is; the downstream
        // tables are curated against this vocabulary.
        let attributes = template_attributes(r#"<div v-for="item in items">x</div>"#);
        assert_eq!(attributes, ["in"]);
    }

    #[test]
    fn mustache_text_is_not_an_attribute() {
        let attributes = template_attributes(r#"<div class="a"><span>{{ x }}</span></div>"#);
        assert_eq!(attributes, ["class"]);
    }

    #[test]
    fn trailing_boolean_attribute_matches() {
        let attributes = template_attributes("<button disabled>go</button>");
        assert_eq!(attributes, ["disabled"]);
    }

    #[test]
    fn empty_markup_yields_nothing() {
        assert!(template_elements("").is_empty());
        assert!(template_attributes("").is_empty());
    }
}
