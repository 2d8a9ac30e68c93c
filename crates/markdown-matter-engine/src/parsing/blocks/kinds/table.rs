use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::{ruler::BlockRule, state::BlockState, token::TokenKind};

pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Whether `line` is a delimiter row such as `| --- | :-: |`.
    pub fn is_delimiter_row(line: &str) -> bool {
        static DELIMITER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = DELIMITER_REGEX.get_or_init(|| {
            Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$").expect("Invalid delimiter regex")
        });
        line.contains([Self::PIPE, '-']) && re.is_match(line)
    }
}

/// Pipe tables: a header row, a delimiter row, then body rows until a blank
/// line or a line without a pipe.
pub struct TableRule;

impl BlockRule for TableRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if start_line + 2 > end_line || state.is_code_indented(start_line) {
            return false;
        }
        let header = state.line_text(start_line);
        if !header.contains(Table::PIPE) {
            return false;
        }
        let delimiter_line = start_line + 1;
        if state.s_count[delimiter_line] < state.blk_indent
            || state.is_code_indented(delimiter_line)
            || !Table::is_delimiter_row(state.line_text(delimiter_line))
        {
            return false;
        }
        // A delimiter row of dashes alone is a setext underline, not a table.
        if !state.line_text(delimiter_line).contains(Table::PIPE) {
            return false;
        }
        if silent {
            return true;
        }

        let mut next_line = delimiter_line + 1;
        while next_line < end_line
            && !state.is_empty(next_line)
            && state.s_count[next_line] >= state.blk_indent
            && state.line_text(next_line).contains(Table::PIPE)
        {
            next_line += 1;
        }

        let rows: Vec<&str> = (start_line..next_line).map(|l| state.line_text(l)).collect();
        let token = state.push(TokenKind::Table, 0);
        token.markup = Table::PIPE.to_string();
        token.content = rows.join("\n");
        token.map = Some([start_line, next_line]);

        state.line = next_line;
        true
    }
}
