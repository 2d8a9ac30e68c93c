//! # Front Matter
//!
//! Recognises a leading metadata block fenced by a repeated marker line:
//!
//! ```text
//! ---
//! title: Hello
//! tags: [a, b]
//! ---
//! Body text
//! ```
//!
//! ## Phases
//!
//! 1. **Marker scanner** (`scanner`): the opening run must sit at offset 0 of
//!    the document and repeat the marker at least `min_markers` times
//! 2. **Extent finder** (`extent`): walks the following lines until a closing
//!    run, the `...` end marker, a dedent, or the end of input
//! 3. **Rule** (`rule`): `FrontMatterRule` plugs both phases into the block
//!    pipeline and emits one hidden `FrontMatter` token
//!
//! An unterminated block is not an error: it extends to the end of input.

pub mod extent;
pub mod rule;
pub mod scanner;

pub use extent::{END_MARKER, Extent, Terminator, find_extent};
pub use rule::{ALT_CHAINS, FrontMatterRule, RULE_NAME, register};
pub use scanner::{OpeningRun, scan_opening};

use crate::parsing::{blocks::BlockState, rope::Span};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Front matter marker must not be empty")]
    EmptyMarker,
    #[error("Front matter marker must not contain whitespace: {0:?}")]
    WhitespaceMarker(String),
    #[error("Minimum marker count must be at least 1")]
    ZeroMinimum,
}

/// Marker configuration for the front-matter rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterOptions {
    marker: String,
    min_markers: usize,
}

impl FrontMatterOptions {
    pub const DEFAULT_MARKER: &'static str = "-";
    pub const DEFAULT_MIN_MARKERS: usize = 3;

    pub fn new(marker: impl Into<String>, min_markers: usize) -> Result<Self, OptionsError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(OptionsError::EmptyMarker);
        }
        if marker.chars().any(char::is_whitespace) {
            return Err(OptionsError::WhitespaceMarker(marker));
        }
        if min_markers == 0 {
            return Err(OptionsError::ZeroMinimum);
        }
        Ok(Self {
            marker,
            min_markers,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn min_markers(&self) -> usize {
        self.min_markers
    }
}

impl Default for FrontMatterOptions {
    fn default() -> Self {
        Self {
            marker: Self::DEFAULT_MARKER.to_string(),
            min_markers: Self::DEFAULT_MIN_MARKERS,
        }
    }
}

/// Where a front-matter block sits in the source.
///
/// `[start_line, end_line)` is the line range the block claims, i.e. the
/// token map. `closing_line` is the line the scan stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterSpan {
    pub start_line: usize,
    pub closing_line: usize,
    pub end_line: usize,
    pub terminator: Terminator,
    /// The opening marker run, in whole marker units.
    pub markup: Span,
    /// Everything strictly between the opening line and the terminator.
    pub body: Span,
}

/// Runs both scan phases without touching `state`.
pub fn scan(
    state: &BlockState<'_>,
    start_line: usize,
    end_line: usize,
    options: &FrontMatterOptions,
) -> Option<FrontMatterSpan> {
    let opening = scan_opening(state, start_line, options)?;
    let extent = find_extent(state, &opening, start_line, end_line, options);

    Some(FrontMatterSpan {
        start_line,
        closing_line: extent.next_line,
        end_line: extent.next_line + usize::from(extent.terminator.consumes_line()),
        terminator: extent.terminator,
        markup: opening.markup,
        body: body_span(state, start_line, extent),
    })
}

/// Byte span from the start of the first body line to the end of the last.
fn body_span(state: &BlockState<'_>, start_line: usize, extent: Extent) -> Span {
    let first = start_line + 1;
    // Exclusive bound on body lines.
    let last = match extent.terminator {
        Terminator::EndMarker => extent.next_line - 1,
        Terminator::Closer | Terminator::Dedent | Terminator::EndOfInput => extent.next_line,
    };

    if last <= first {
        let at = state.b_marks[first.min(state.b_marks.len() - 1)];
        return Span::new(at, at);
    }
    Span::new(state.b_marks[first], state.e_marks[last - 1])
}
