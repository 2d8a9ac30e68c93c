use std::ops::{Deref, DerefMut};

use xi_rope::Rope;

use crate::parsing::rope::{LineRef, Span, lines_with_spans};

use super::{
    ruler::Ruler,
    token::{Token, TokenKind},
};

/// Tab stops used when measuring indentation columns.
const TAB_WIDTH: usize = 4;

/// What kind of block the rules are currently nested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentType {
    Root,
    Container,
    Paragraph,
}

/// Shared state for one block-level tokenizer run.
///
/// Owns the per-line maps derived from the source: `b_marks`/`e_marks` hold
/// the byte offsets where each line starts and ends (newline excluded),
/// `t_shift` the number of leading whitespace bytes, and `s_count` the
/// leading indentation in columns. One sentinel entry follows the last line.
pub struct BlockState<'a> {
    pub src: &'a str,
    pub ruler: &'a Ruler,

    pub b_marks: Vec<usize>,
    pub e_marks: Vec<usize>,
    pub t_shift: Vec<usize>,
    pub s_count: Vec<usize>,

    /// Indent required by the enclosing container blocks.
    pub blk_indent: usize,
    pub parent_type: ParentType,
    /// Exclusive upper bound on lines rules may look at.
    pub line_max: usize,
    /// Next line to be tokenized.
    pub line: usize,

    pub tokens: Vec<Token>,
}

impl<'a> BlockState<'a> {
    pub fn new(src: &'a str, lines: &[LineRef], ruler: &'a Ruler) -> Self {
        let mut b_marks = Vec::with_capacity(lines.len() + 1);
        let mut e_marks = Vec::with_capacity(lines.len() + 1);
        let mut t_shift = Vec::with_capacity(lines.len() + 1);
        let mut s_count = Vec::with_capacity(lines.len() + 1);

        for lr in lines {
            let (bytes, columns) = measure_indent(&lr.text);
            b_marks.push(lr.span.start);
            e_marks.push(lr.span.end - lr.terminator_len());
            t_shift.push(bytes);
            s_count.push(columns);
        }

        // Sentinel so lookups at `line_max` never go out of bounds.
        b_marks.push(src.len());
        e_marks.push(src.len());
        t_shift.push(0);
        s_count.push(0);

        Self {
            src,
            ruler,
            b_marks,
            e_marks,
            t_shift,
            s_count,
            blk_indent: 0,
            parent_type: ParentType::Root,
            line_max: lines.len(),
            line: 0,
            tokens: Vec::new(),
        }
    }

    /// Builds the line maps straight from a string.
    pub fn from_source(src: &'a str, ruler: &'a Ruler) -> Self {
        let lines: Vec<LineRef> = lines_with_spans(&Rope::from(src)).collect();
        Self::new(src, &lines, ruler)
    }

    /// First non-whitespace byte offset of `line`.
    pub fn content_start(&self, line: usize) -> usize {
        self.b_marks[line] + self.t_shift[line]
    }

    /// Line text after leading indentation, newline excluded.
    pub fn line_text(&self, line: usize) -> &'a str {
        Span::new(self.content_start(line), self.e_marks[line]).slice(self.src)
    }

    /// Whether `line` is indented four or more columns past `blk_indent`.
    pub fn is_code_indented(&self, line: usize) -> bool {
        self.s_count[line] >= self.blk_indent + TAB_WIDTH
    }

    /// Skips spaces and tabs starting at byte `pos`.
    pub fn skip_spaces(&self, mut pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
            pos += 1;
        }
        pos
    }

    pub fn is_empty(&self, line: usize) -> bool {
        self.content_start(line) >= self.e_marks[line]
    }

    pub fn skip_empty_lines(&self, mut from: usize) -> usize {
        while from < self.line_max && self.is_empty(from) {
            from += 1;
        }
        from
    }

    /// Appends a token and returns it for field population.
    pub fn push(&mut self, kind: TokenKind, nesting: i8) -> &mut Token {
        self.tokens.push(Token::new(kind, nesting));
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }
}

/// Returns `(bytes, columns)` of leading whitespace in `text`.
fn measure_indent(text: &str) -> (usize, usize) {
    let mut bytes = 0;
    let mut columns = 0;
    for b in text.bytes() {
        match b {
            b' ' => columns += 1,
            b'\t' => columns += TAB_WIDTH - columns % TAB_WIDTH,
            _ => break,
        }
        bytes += 1;
    }
    (bytes, columns)
}

/// Temporarily narrows `parent_type`/`line_max` on a [`BlockState`].
///
/// The previous values are restored when the context is dropped, so every
/// exit path of the scope leaves the state as it found it.
pub struct ScopedContext<'s, 'a> {
    state: &'s mut BlockState<'a>,
    saved_parent: ParentType,
    saved_line_max: usize,
}

impl<'s, 'a> ScopedContext<'s, 'a> {
    pub fn enter(state: &'s mut BlockState<'a>, parent_type: ParentType, line_max: usize) -> Self {
        let saved_parent = std::mem::replace(&mut state.parent_type, parent_type);
        let saved_line_max = std::mem::replace(&mut state.line_max, line_max);
        Self {
            state,
            saved_parent,
            saved_line_max,
        }
    }
}

impl<'a> Deref for ScopedContext<'_, 'a> {
    type Target = BlockState<'a>;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl DerefMut for ScopedContext<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for ScopedContext<'_, '_> {
    fn drop(&mut self) {
        self.state.parent_type = self.saved_parent;
        self.state.line_max = self.saved_line_max;
    }
}
