use crate::parsing::blocks::{
    ruler::BlockRule,
    state::{BlockState, ParentType, ScopedContext},
    token::TokenKind,
};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block rule matches.
pub struct Paragraph;

impl Paragraph {
    /// Rule chain probed to decide whether a line interrupts a paragraph.
    pub const TERMINATOR_CHAIN: &'static str = "paragraph";
}

pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if silent {
            // Paragraphs never interrupt anything.
            return false;
        }

        let ruler = state.ruler;
        let mut next_line = start_line + 1;

        {
            let mut ctx = ScopedContext::enter(state, ParentType::Paragraph, end_line);
            'lines: while next_line < end_line && !ctx.is_empty(next_line) {
                // Indented continuation lines never start a new block.
                if !ctx.is_code_indented(next_line) {
                    for rule in ruler.chain(Paragraph::TERMINATOR_CHAIN) {
                        if rule.run(&mut *ctx, next_line, end_line, true) {
                            break 'lines;
                        }
                    }
                }
                next_line += 1;
            }
        }

        let lines: Vec<&str> = (start_line..next_line).map(|l| state.line_text(l).trim_end()).collect();
        let token = state.push(TokenKind::Paragraph, 0);
        token.content = lines.join("\n");
        token.map = Some([start_line, next_line]);

        state.line = next_line;
        true
    }
}
