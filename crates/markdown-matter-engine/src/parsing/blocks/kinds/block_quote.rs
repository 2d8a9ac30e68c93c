use crate::parsing::blocks::{ruler::BlockRule, state::BlockState, token::TokenKind};

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// the rules that need to recognise a quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}

/// Consecutive `>`-prefixed lines form one quote token.
///
/// Quote content is kept as text; it is not re-tokenized.
pub struct BlockQuoteRule;

impl BlockRule for BlockQuoteRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }
        let (depth, _) = BlockQuote::strip_prefixes(state.line_text(start_line));
        if depth == 0 {
            return false;
        }
        if silent {
            return true;
        }

        let mut lines = Vec::new();
        let mut next_line = start_line;
        while next_line < end_line {
            let text = state.line_text(next_line);
            let (d, idx) = BlockQuote::strip_prefixes(text);
            if d == 0 || state.s_count[next_line] < state.blk_indent {
                break;
            }
            lines.push(&text[idx..]);
            next_line += 1;
        }

        let token = state.push(TokenKind::BlockQuote, 0);
        token.markup = BlockQuote::PREFIX.to_string();
        token.meta = depth.to_string();
        token.content = lines.join("\n");
        token.map = Some([start_line, next_line]);

        state.line = next_line;
        true
    }
}
