use crate::parsing::{blocks::BlockState, rope::Span};

use super::{
    FrontMatterOptions,
    scanner::{OpeningRun, run_end, run_units},
};

/// Alternate closing sentinel for a front-matter block.
pub const END_MARKER: &str = "...";

/// Why the extent scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A closing run at least as long as the opening one.
    Closer,
    /// The previous line was the literal `...` end marker.
    EndMarker,
    /// A non-blank line dedented below the block indent.
    Dedent,
    /// Ran out of lines.
    EndOfInput,
}

impl Terminator {
    /// Whether the terminating line itself belongs to the block.
    pub fn consumes_line(self) -> bool {
        matches!(self, Terminator::Closer)
    }
}

/// Result of [`find_extent`]: the line the scan stopped on and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub next_line: usize,
    pub terminator: Terminator,
}

/// Walks the lines after the opening run until the block ends.
///
/// The first line that satisfies a terminating condition wins; there is no
/// lookahead. The `...` end marker is compared against the line scanned on
/// the previous iteration, so it is detected one line late and only when
/// another line follows it.
pub fn find_extent(
    state: &BlockState<'_>,
    opening: &OpeningRun,
    start_line: usize,
    end_line: usize,
    options: &FrontMatterOptions,
) -> Extent {
    let marker = options.marker().as_bytes();
    let src = state.src.as_bytes();

    let mut prev = Span::new(state.content_start(start_line), state.e_marks[start_line]);
    let mut next_line = start_line;

    let terminator = loop {
        next_line += 1;
        if next_line >= end_line {
            break Terminator::EndOfInput;
        }

        if prev.slice(state.src) == END_MARKER {
            break Terminator::EndMarker;
        }

        let start = state.content_start(next_line);
        let max = state.e_marks[next_line];
        prev = Span::new(start, max);

        if start < max && state.s_count[next_line] < state.blk_indent {
            break Terminator::Dedent;
        }

        if start >= max || src[start] != marker[0] {
            continue;
        }

        // Four or more columns in: an indented code line, not a closer.
        if state.is_code_indented(next_line) {
            log::trace!("front matter: line {next_line} is code-indented, skipped");
            continue;
        }

        let pos = run_end(src, start, max, marker);
        if run_units(start, pos, marker) < opening.count {
            continue;
        }

        let pos = pos - (pos - start) % marker.len();
        if state.skip_spaces(pos) < max {
            log::trace!("front matter: line {next_line} has text after its run, skipped");
            continue;
        }

        break Terminator::Closer;
    };

    Extent {
        next_line,
        terminator,
    }
}
