//! Feature scanners.
//!
//! Three independent, stateless scanners, one per block kind. Each is a
//! pure function of the raw block text and returns a sorted,
//! deduplicated list of feature names. All three are heuristic
//! substring/regex presence tests by design; see the crate docs.

mod html;
mod script;
mod style;

pub use html::{template_attributes, template_elements};
pub use script::script_features;
pub use style::style_features;

use rustc_hash::FxHashSet;

/// Deterministic ordering for scanner output: lexicographic.
fn into_sorted(set: FxHashSet<String>) -> Vec<String> {
    let mut features: Vec<String> = set.into_iter().collect();
    features.sort_unstable();
    features
}
