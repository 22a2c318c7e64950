//! # vernis_esquisse
//!
//! Esquisse - the structural sketch of a Vue Single File Component.
//!
//! ## Name Origin
//!
//! **Esquisse** (/ɛs.kis/) is the French term for a painter's first
//! rough sketch, laying out the composition before any detail work.
//! `vernis_esquisse` does exactly that for a `.vue` file: it sketches
//! the top-level composition (template, script, script setup, style
//! blocks) without interpreting what is inside any of them.
//!
//! ## Scope
//!
//! This crate only splits blocks. It never parses template markup,
//! JavaScript, or CSS; downstream crates decide what to do with the raw
//! block contents. Parsing is a single left-to-right pass over the
//! source bytes, and all block contents borrow from the input
//! (`Cow::Borrowed`).
//!
//! ## Usage
//!
//! ```
//! use vernis_esquisse::{parse_sfc, ParseOptions};
//!
//! let source = "<template><div>Hello</div></template>";
//! let sketch = parse_sfc(source, ParseOptions::default()).unwrap();
//! assert_eq!(sketch.template.unwrap().content, "<div>Hello</div>");
//! ```

mod parse;
mod types;

pub use parse::parse_sfc;
pub use types::{
    BlockSpan, ParseError, ParseErrorCode, ParseOptions, ScriptBlock, SfcSketch, StyleBlock,
    TemplateBlock,
};
