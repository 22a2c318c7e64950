//! Block types produced by the structural sketch.
//!
//! Zero-copy design: block contents borrow from the source text, with
//! `into_owned` escape hatches for callers that need `'static` data.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Structural sketch of one SFC source: the blocks, nothing else.
///
/// Cardinality is enforced at construction time by [`crate::parse_sfc`]:
/// at most one template, at most one plain script, at most one script
/// setup, any number of styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SfcSketch<'a> {
    /// Filename the source came from (diagnostics only).
    #[serde(borrow)]
    pub filename: Cow<'a, str>,

    /// Template block, if present.
    pub template: Option<TemplateBlock<'a>>,

    /// Plain script block, if present.
    pub script: Option<ScriptBlock<'a>>,

    /// Script setup block, if present.
    pub script_setup: Option<ScriptBlock<'a>>,

    /// Style blocks in source order.
    pub styles: Vec<StyleBlock<'a>>,
}

impl<'a> Default for SfcSketch<'a> {
    fn default() -> Self {
        Self {
            filename: Cow::Borrowed(""),
            template: None,
            script: None,
            script_setup: None,
            styles: Vec::new(),
        }
    }
}

impl<'a> SfcSketch<'a> {
    /// Convert to an owned sketch that no longer borrows the source.
    pub fn into_owned(self) -> SfcSketch<'static> {
        SfcSketch {
            filename: Cow::Owned(self.filename.into_owned()),
            template: self.template.map(|t| t.into_owned()),
            script: self.script.map(|s| s.into_owned()),
            script_setup: self.script_setup.map(|s| s.into_owned()),
            styles: self.styles.into_iter().map(|s| s.into_owned()).collect(),
        }
    }
}

/// Template block: raw markup plus its dialect tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBlock<'a> {
    /// Raw block content.
    #[serde(borrow)]
    pub content: Cow<'a, str>,

    /// Markup dialect from the `lang` attribute (`html` when absent).
    #[serde(default, borrow)]
    pub lang: Option<Cow<'a, str>>,

    /// Content span within the original source.
    pub loc: BlockSpan,
}

impl<'a> TemplateBlock<'a> {
    pub fn into_owned(self) -> TemplateBlock<'static> {
        TemplateBlock {
            content: Cow::Owned(self.content.into_owned()),
            lang: self.lang.map(|l| Cow::Owned(l.into_owned())),
            loc: self.loc,
        }
    }
}

/// Script block, either plain `<script>` or `<script setup>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptBlock<'a> {
    /// Raw block content.
    #[serde(borrow)]
    pub content: Cow<'a, str>,

    /// Script dialect from the `lang` attribute (`js` when absent).
    #[serde(default, borrow)]
    pub lang: Option<Cow<'a, str>>,

    /// Whether this is a `<script setup>` block.
    #[serde(default)]
    pub setup: bool,

    /// Content span within the original source.
    pub loc: BlockSpan,
}

impl<'a> ScriptBlock<'a> {
    pub fn into_owned(self) -> ScriptBlock<'static> {
        ScriptBlock {
            content: Cow::Owned(self.content.into_owned()),
            lang: self.lang.map(|l| Cow::Owned(l.into_owned())),
            setup: self.setup,
            loc: self.loc,
        }
    }
}

/// Style block with its `scoped`/`module` modifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBlock<'a> {
    /// Raw block content.
    #[serde(borrow)]
    pub content: Cow<'a, str>,

    /// Style dialect from the `lang` attribute (`css` when absent).
    #[serde(default, borrow)]
    pub lang: Option<Cow<'a, str>>,

    /// Whether the block carries the `scoped` attribute.
    #[serde(default)]
    pub scoped: bool,

    /// Whether the block carries the `module` attribute.
    #[serde(default)]
    pub module: bool,

    /// Content span within the original source.
    pub loc: BlockSpan,
}

impl<'a> StyleBlock<'a> {
    pub fn into_owned(self) -> StyleBlock<'static> {
        StyleBlock {
            content: Cow::Owned(self.content.into_owned()),
            lang: self.lang.map(|l| Cow::Owned(l.into_owned())),
            scoped: self.scoped,
            module: self.module,
            loc: self.loc,
        }
    }
}

/// Span of a block's content within the original source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpan {
    /// Content start offset in bytes.
    pub start: usize,

    /// Content end offset in bytes.
    pub end: usize,

    /// Content start line (1-based).
    pub start_line: usize,

    /// Content start column (1-based).
    pub start_column: usize,

    /// Content end line (1-based).
    pub end_line: usize,

    /// Content end column (1-based).
    pub end_column: usize,
}

/// Options for [`crate::parse_sfc`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Filename recorded on the sketch and in diagnostics.
    pub filename: String,
}

/// Machine-readable classification of a structural parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseErrorCode {
    /// More than one `<template>` block.
    DuplicateTemplate,
    /// More than one plain `<script>` block.
    DuplicateScript,
    /// More than one `<script setup>` block.
    DuplicateScriptSetup,
    /// A template/script/style block with no closing tag.
    UnterminatedBlock,
}

/// Structural parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable message.
    pub message: String,

    /// Failure classification.
    pub code: ParseErrorCode,

    /// Where the offending block starts, when known.
    pub span: Option<BlockSpan>,
}
