use crate::parsing::{blocks::BlockState, rope::Span};

use super::FrontMatterOptions;

/// The opening marker line of a front-matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningRun {
    /// Opening run, trimmed to whole marker units.
    pub markup: Span,
    /// Run length in marker units.
    pub count: usize,
}

/// Recognises the opening marker run of a front-matter block.
///
/// Front matter is only allowed at the very top of a document, so this
/// declines for any `start_line` other than 0 and whenever byte 0 of the
/// source is not the first marker byte. Never mutates `state`.
pub fn scan_opening(
    state: &BlockState<'_>,
    start_line: usize,
    options: &FrontMatterOptions,
) -> Option<OpeningRun> {
    let marker = options.marker().as_bytes();
    let src = state.src.as_bytes();

    if start_line != 0 || src.first() != marker.first() {
        return None;
    }

    let start = state.content_start(start_line);
    let max = state.e_marks[start_line];
    let pos = run_end(src, start, max, marker);

    let count = run_units(start, pos, marker);
    if count < options.min_markers() {
        log::trace!("front matter declined: opening run of {count} below minimum");
        return None;
    }

    Some(OpeningRun {
        markup: Span::new(start, pos - (pos - start) % marker.len()),
        count,
    })
}

/// Offset just past the marker run that begins at `start`.
///
/// Matching is modular over the marker bytes, so a multi-byte marker such as
/// `+-` repeats as `+-+-+-` and the run may end partway through a unit.
/// `src[start]` is assumed to already match the first marker byte.
pub(super) fn run_end(src: &[u8], start: usize, max: usize, marker: &[u8]) -> usize {
    let mut pos = start + 1;
    while pos < max && src[pos] == marker[(pos - start) % marker.len()] {
        pos += 1;
    }
    pos
}

/// Number of whole marker units in the run `[start, end)`.
pub(super) fn run_units(start: usize, end: usize, marker: &[u8]) -> usize {
    (end - start) / marker.len()
}
