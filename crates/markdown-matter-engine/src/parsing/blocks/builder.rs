use super::state::BlockState;

/// Runs the block rules over `[start_line, end_line)`.
///
/// For every non-empty line each enabled rule is tried in priority order
/// until one claims it. Rules are required to advance `state.line`; a rule
/// that claims a line without advancing is treated as a bug and the line is
/// skipped so the loop still terminates.
pub fn tokenize(state: &mut BlockState<'_>, start_line: usize, end_line: usize) {
    let ruler = state.ruler;
    let mut line = start_line;

    while line < end_line {
        line = state.skip_empty_lines(line);
        state.line = line;
        if line >= end_line {
            break;
        }

        // Dedented past the container: belongs to an outer block.
        if state.s_count[line] < state.blk_indent {
            break;
        }

        let mut claimed = false;
        for rule in ruler.chain("") {
            if rule.run(state, line, end_line, false) {
                claimed = true;
                break;
            }
        }

        if !claimed || state.line <= line {
            log::warn!("no block rule advanced past line {line}; skipping it");
            state.line = line + 1;
        }
        line = state.line;
    }
}
