use crate::parsing::blocks::Token;

/// Validates token stream invariants.
///
/// Asserts that:
/// - Every block token carries a line map
/// - Every map is non-empty and within `[0, line_count]`
/// - Maps appear in document order and never overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tokens: &[Token], line_count: usize) {
    let mut prev_end = 0;
    for t in tokens.iter().filter(|t| t.block) {
        let [start, end] = t
            .map
            .unwrap_or_else(|| panic!("block token without map: {:?}", t.kind));
        assert!(
            start < end && end <= line_count,
            "token map out of bounds: {:?} {:?} (line count: {})",
            t.kind,
            [start, end],
            line_count
        );
        assert!(
            start >= prev_end,
            "token map overlaps previous token: {:?} {:?} (previous end: {})",
            t.kind,
            [start, end],
            prev_end
        );
        prev_end = end;
    }
}
