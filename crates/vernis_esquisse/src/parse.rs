//! Single-pass structural parser.
//!
//! Splits an SFC source into its top-level blocks without interpreting
//! block contents. Byte-level scanning with `memchr`, zero-copy block
//! contents borrowed from the input.

use crate::types::*;
use memchr::memchr;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

const TAG_TEMPLATE: &[u8] = b"template";

/// Parse an SFC source into its structural sketch.
///
/// Recognizes top-level `<template>`, `<script>`, `<script setup>` and
/// `<style>` blocks (case-insensitive). Unknown top-level blocks such as
/// `<i18n>` are consumed and skipped. Duplicate template/script/script
/// setup blocks and unterminated known blocks are parse errors.
pub fn parse_sfc<'a>(source: &'a str, options: ParseOptions) -> Result<SfcSketch<'a>, ParseError> {
    let mut sketch = SfcSketch {
        filename: Cow::Owned(options.filename),
        ..Default::default()
    };
    let mut scanner = Scanner::new(source);

    while scanner.skip_to_tag_open() {
        let Some(tag) = scanner.read_open_tag() else {
            // Not an opening tag (closing tag, comment, stray `<`).
            scanner.advance(1);
            continue;
        };

        let Some(kind) = BlockKind::from_name(tag.name) else {
            // Custom block: consume to its closing tag and drop it.
            if !tag.self_closing {
                let _ = scanner.read_plain_body(tag.name);
            }
            continue;
        };

        let (content, span) = if tag.self_closing {
            ("", scanner.span_here())
        } else {
            let body = match kind {
                BlockKind::Template => scanner.read_template_body(),
                _ => scanner.read_plain_body(tag.name),
            };
            body.ok_or_else(|| ParseError {
                message: format!("<{}> block is never closed", tag.name),
                code: ParseErrorCode::UnterminatedBlock,
                span: None,
            })?
        };

        match kind {
            BlockKind::Template => {
                if sketch.template.is_some() {
                    return Err(duplicate_block(
                        "one <template> block",
                        ParseErrorCode::DuplicateTemplate,
                        span,
                    ));
                }
                sketch.template = Some(TemplateBlock {
                    content: Cow::Borrowed(content),
                    lang: tag.lang.map(Cow::Borrowed),
                    loc: span,
                });
            }
            BlockKind::Script => {
                if tag.setup {
                    if sketch.script_setup.is_some() {
                        return Err(duplicate_block(
                            "one <script setup> block",
                            ParseErrorCode::DuplicateScriptSetup,
                            span,
                        ));
                    }
                    sketch.script_setup = Some(ScriptBlock {
                        content: Cow::Borrowed(content),
                        lang: tag.lang.map(Cow::Borrowed),
                        setup: true,
                        loc: span,
                    });
                } else {
                    if sketch.script.is_some() {
                        return Err(duplicate_block(
                            "one <script> block",
                            ParseErrorCode::DuplicateScript,
                            span,
                        ));
                    }
                    sketch.script = Some(ScriptBlock {
                        content: Cow::Borrowed(content),
                        lang: tag.lang.map(Cow::Borrowed),
                        setup: false,
                        loc: span,
                    });
                }
            }
            BlockKind::Style => {
                sketch.styles.push(StyleBlock {
                    content: Cow::Borrowed(content),
                    lang: tag.lang.map(Cow::Borrowed),
                    scoped: tag.scoped,
                    module: tag.module,
                    loc: span,
                });
            }
        }
    }

    Ok(sketch)
}

fn duplicate_block(expected: &str, code: ParseErrorCode, span: BlockSpan) -> ParseError {
    ParseError {
        message: format!("SFC can only contain {expected}"),
        code,
        span: Some(span),
    }
}

/// The three block kinds the sketch records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Template,
    Script,
    Style,
}

impl BlockKind {
    fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("template") {
            Some(Self::Template)
        } else if name.eq_ignore_ascii_case("script") {
            Some(Self::Script)
        } else if name.eq_ignore_ascii_case("style") {
            Some(Self::Style)
        } else {
            None
        }
    }
}

/// Opening tag with the attributes the sketch cares about.
struct OpenTag<'a> {
    name: &'a str,
    lang: Option<&'a str>,
    setup: bool,
    scoped: bool,
    module: bool,
    self_closing: bool,
}

/// Byte cursor over the source, tracking 1-based line/column.
struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move the cursor forward by `n` bytes, updating line/column.
    fn advance(&mut self, n: usize) {
        let end = (self.pos + n).min(self.bytes.len());
        for &b in &self.bytes[self.pos..end] {
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    /// Advance to the next `<`. Returns false at end of input.
    fn skip_to_tag_open(&mut self) -> bool {
        match memchr(b'<', &self.bytes[self.pos..]) {
            Some(off) => {
                self.advance(off);
                true
            }
            None => {
                self.advance(self.bytes.len() - self.pos);
                false
            }
        }
    }

    /// Zero-length span at the current cursor position.
    fn span_here(&self) -> BlockSpan {
        BlockSpan {
            start: self.pos,
            end: self.pos,
            start_line: self.line,
            start_column: self.column,
            end_line: self.line,
            end_column: self.column,
        }
    }

    fn span_from(&self, start: usize, start_line: usize, start_column: usize) -> BlockSpan {
        BlockSpan {
            start,
            end: self.pos,
            start_line,
            start_column,
            end_line: self.line,
            end_column: self.column,
        }
    }

    /// Read an opening tag at the current `<`, leaving the cursor just
    /// past its `>`. Returns `None` (cursor unmoved) when the `<` does
    /// not start an opening tag.
    fn read_open_tag(&mut self) -> Option<OpenTag<'a>> {
        let src: &'a str = self.source;
        let bytes = self.bytes;
        let len = bytes.len();

        let mut cursor = self.pos + 1;
        let name_start = cursor;
        while cursor < len && is_tag_name_byte(bytes[cursor]) {
            cursor += 1;
        }
        if cursor == name_start {
            return None;
        }
        let name = &src[name_start..cursor];

        let mut attrs: FxHashMap<&'a str, &'a str> = FxHashMap::default();
        let mut self_closing = false;

        loop {
            while cursor < len && is_whitespace_byte(bytes[cursor]) {
                cursor += 1;
            }
            if cursor >= len {
                // Open tag runs off the end of the input.
                return None;
            }
            match bytes[cursor] {
                b'>' => {
                    cursor += 1;
                    break;
                }
                b'/' => {
                    if bytes.get(cursor + 1) == Some(&b'>') {
                        self_closing = true;
                        cursor += 2;
                        break;
                    }
                    cursor += 1;
                }
                _ => {
                    let attr_start = cursor;
                    while cursor < len
                        && !matches!(
                            bytes[cursor],
                            b'=' | b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/'
                        )
                    {
                        cursor += 1;
                    }
                    let attr_name = &src[attr_start..cursor];

                    while cursor < len && matches!(bytes[cursor], b' ' | b'\t') {
                        cursor += 1;
                    }

                    let value: &'a str = if cursor < len && bytes[cursor] == b'=' {
                        cursor += 1;
                        while cursor < len && matches!(bytes[cursor], b' ' | b'\t') {
                            cursor += 1;
                        }
                        if cursor < len && (bytes[cursor] == b'"' || bytes[cursor] == b'\'') {
                            let quote = bytes[cursor];
                            cursor += 1;
                            let value_start = cursor;
                            match memchr(quote, &bytes[cursor..]) {
                                Some(off) => {
                                    cursor += off;
                                    let value = &src[value_start..cursor];
                                    cursor += 1;
                                    value
                                }
                                None => {
                                    cursor = len;
                                    &src[value_start..len]
                                }
                            }
                        } else {
                            let value_start = cursor;
                            while cursor < len
                                && !matches!(bytes[cursor], b' ' | b'\t' | b'\n' | b'>' | b'/')
                            {
                                cursor += 1;
                            }
                            &src[value_start..cursor]
                        }
                    } else {
                        ""
                    };

                    if !attr_name.is_empty() {
                        attrs.insert(attr_name, value);
                    }
                }
            }
        }

        self.advance(cursor - self.pos);

        Some(OpenTag {
            name,
            lang: attrs.get("lang").copied(),
            setup: attrs.contains_key("setup"),
            scoped: attrs.contains_key("scoped"),
            module: attrs.contains_key("module"),
            self_closing,
        })
    }

    /// Read a template body, handling nested `<template>` tags by depth
    /// counting. Leaves the cursor past `</template>`. Returns `None`
    /// when no closing tag exists (cursor consumed to end of input).
    fn read_template_body(&mut self) -> Option<(&'a str, BlockSpan)> {
        let src: &'a str = self.source;
        let content_start = self.pos;
        let (start_line, start_column) = (self.line, self.column);
        let closing_len = TAG_TEMPLATE.len() + 3; // "</" + name + ">"
        let mut depth = 1usize;

        while self.skip_to_tag_open() {
            if self.closing_tag_here(TAG_TEMPLATE) {
                depth -= 1;
                if depth == 0 {
                    let span = self.span_from(content_start, start_line, start_column);
                    let content = &src[content_start..self.pos];
                    self.advance(closing_len);
                    return Some((content, span));
                }
                self.advance(closing_len);
                continue;
            }
            if self.opens_nested_template() {
                depth += 1;
            }
            self.advance(1);
        }
        None
    }

    /// Read a body closed by `</name>`. Leaves the cursor past the
    /// closing tag. Returns `None` when no closing tag exists (cursor
    /// consumed to end of input).
    fn read_plain_body(&mut self, name: &str) -> Option<(&'a str, BlockSpan)> {
        let src: &'a str = self.source;
        let content_start = self.pos;
        let (start_line, start_column) = (self.line, self.column);

        while self.skip_to_tag_open() {
            if self.closing_tag_here(name.as_bytes()) {
                let span = self.span_from(content_start, start_line, start_column);
                let content = &src[content_start..self.pos];
                self.advance(name.len() + 3);
                return Some((content, span));
            }
            self.advance(1);
        }
        None
    }

    /// Whether `</name>` starts at the cursor (case-insensitive).
    fn closing_tag_here(&self, name: &[u8]) -> bool {
        let rest = &self.bytes[self.pos..];
        rest.len() >= name.len() + 3
            && rest[0] == b'<'
            && rest[1] == b'/'
            && rest[2..2 + name.len()].eq_ignore_ascii_case(name)
            && rest[2 + name.len()] == b'>'
    }

    /// Whether a non-self-closing nested `<template ...>` starts at the
    /// cursor.
    fn opens_nested_template(&self) -> bool {
        let rest = &self.bytes[self.pos..];
        let name_end = 1 + TAG_TEMPLATE.len();
        if rest.len() <= name_end || !rest[1..name_end].eq_ignore_ascii_case(TAG_TEMPLATE) {
            return false;
        }
        if !matches!(rest[name_end], b' ' | b'\t' | b'\r' | b'\n' | b'>') {
            return false;
        }
        // Self-closing nested templates do not change the depth.
        let mut i = name_end;
        while i < rest.len() && rest[i] != b'>' {
            if rest[i] == b'/' && rest.get(i + 1) == Some(&b'>') {
                return false;
            }
            i += 1;
        }
        true
    }
}

#[inline]
fn is_tag_name_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_')
}

#[inline]
fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
