use crate::parsing::blocks::{ruler::BlockRule, state::BlockState, token::TokenKind};

pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;

    /// Returns the marker character when `line` is a thematic break.
    pub fn marker(line: &str) -> Option<char> {
        let first = line.chars().next().filter(|c| Self::MARKERS.contains(c))?;
        let mut count = 0;
        for c in line.chars() {
            match c {
                c if c == first => count += 1,
                ' ' | '\t' => {}
                _ => return None,
            }
        }
        (count >= Self::MIN_MARKERS).then_some(first)
    }
}

pub struct HrRule;

impl BlockRule for HrRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }
        let Some(marker) = ThematicBreak::marker(state.line_text(start_line)) else {
            return false;
        };
        if silent {
            return true;
        }

        let token = state.push(TokenKind::Hr, 0);
        token.markup = marker.to_string().repeat(ThematicBreak::MIN_MARKERS);
        token.map = Some([start_line, start_line + 1]);

        state.line = start_line + 1;
        true
    }
}
