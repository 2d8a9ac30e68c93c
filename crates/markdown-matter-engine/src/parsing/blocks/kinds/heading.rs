use crate::parsing::blocks::{ruler::BlockRule, state::BlockState, token::TokenKind};

pub struct Heading;

impl Heading {
    pub const PREFIX: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses an ATX heading into `(level, text)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|c| *c == Self::PREFIX).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }

        let text = rest.trim();
        // Optional closing sequence, only when separated by whitespace.
        let stripped = text.trim_end_matches(Self::PREFIX);
        let text = if stripped.is_empty() || stripped.ends_with([' ', '\t']) {
            stripped.trim_end()
        } else {
            text
        };
        Some((level as u8, text))
    }
}

pub struct HeadingRule;

impl BlockRule for HeadingRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }
        let Some((level, text)) = Heading::parse(state.line_text(start_line)) else {
            return false;
        };
        if silent {
            return true;
        }

        let token = state.push(TokenKind::Heading { level }, 0);
        token.markup = Heading::PREFIX.to_string().repeat(level as usize);
        token.content = text.to_string();
        token.map = Some([start_line, start_line + 1]);

        state.line = start_line + 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
        assert_eq!(Heading::parse("###### Deep"), Some((6, "Deep")));
        assert_eq!(Heading::parse("#"), Some((1, "")));
    }

    #[test]
    fn strips_closing_sequence() {
        assert_eq!(Heading::parse("## Title ##"), Some((2, "Title")));
        assert_eq!(Heading::parse("## C#"), Some((2, "C#")));
    }

    #[test]
    fn rejects_non_headings() {
        assert_eq!(Heading::parse("####### seven"), None);
        assert_eq!(Heading::parse("#hashtag"), None);
    }
}
