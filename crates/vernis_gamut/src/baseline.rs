//! Baseline tier tables and classification.
//!
//! The two membership lists are hand-curated, process-wide constants.
//! Anything in neither list is treated as `not-baseline`: the closed
//! world default is conservative on purpose and must stay that way.

use phf::{phf_set, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature tags that are Baseline widely available.
pub static WIDELY_AVAILABLE: Set<&'static str> = phf_set! {
    "html-div",
    "html-span",
    "html-p",
    "html-h1",
    "html-h2",
    "html-h3",
    "html-attr-class",
    "html-attr-id",
    "html-attr-style",
    "js-arrow-functions",
    "js-block-scoping",
    "js-template-literals",
    "css-flexbox",
    "css-media-queries",
    "css-transforms",
};

/// Feature tags that are Baseline newly available.
pub static NEWLY_AVAILABLE: Set<&'static str> = phf_set! {
    "css-grid",
    "css-custom-properties",
    "js-async-await",
    "js-spread-syntax",
    "css-calc",
};

/// Baseline compatibility tier.
///
/// Ordered from best to worst availability, so worst-wins aggregation
/// is `Iterator::max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Supported across all Baseline browsers for 30+ months.
    Widely,
    /// Supported across all Baseline browsers, but only recently.
    Newly,
    /// Not (yet) part of Baseline, or unknown to the tables.
    NotBaseline,
}

impl Tier {
    /// The serialized name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Widely => "widely",
            Tier::Newly => "newly",
            Tier::NotBaseline => "not-baseline",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a namespaced feature tag.
///
/// Exact membership lookups only; no partial matches, no wildcards.
pub fn classify(tag: &str) -> Tier {
    if WIDELY_AVAILABLE.contains(tag) {
        Tier::Widely
    } else if NEWLY_AVAILABLE.contains(tag) {
        Tier::Newly
    } else {
        Tier::NotBaseline
    }
}
