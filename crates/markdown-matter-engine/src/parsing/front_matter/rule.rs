use crate::parsing::blocks::{
    BlockRule, BlockState, ParentType, RuleHandle, Ruler, RulerError, ScopedContext, TokenKind,
};

use super::{FrontMatterOptions, scan, scan_opening};

pub const RULE_NAME: &str = "front_matter";

/// Chains that may still claim the opening lines when this rule declines.
pub const ALT_CHAINS: [&str; 4] = ["paragraph", "reference", "blockquote", "list"];

/// Block rule emitting one hidden [`TokenKind::FrontMatter`] token.
pub struct FrontMatterRule {
    options: FrontMatterOptions,
}

impl FrontMatterRule {
    pub fn new(options: FrontMatterOptions) -> Self {
        Self { options }
    }
}

impl BlockRule for FrontMatterRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if silent {
            return scan_opening(state, start_line, &self.options).is_some();
        }

        let Some(span) = scan(state, start_line, end_line, &self.options) else {
            return false;
        };

        let src = state.src;
        {
            // Nothing nested may scan past the block while the token is built.
            let mut ctx = ScopedContext::enter(state, ParentType::Container, span.closing_line);
            let token = ctx.push(TokenKind::FrontMatter, 0);
            token.hidden = true;
            token.block = true;
            token.markup = span.markup.slice(src).to_string();
            token.meta = span.body.slice(src).to_string();
            token.map = Some([span.start_line, span.end_line]);
        }
        state.line = span.end_line;

        log::debug!(
            "front matter claimed lines {}..{} ({:?}, {} body bytes)",
            span.start_line,
            span.end_line,
            span.terminator,
            span.body.len()
        );
        true
    }
}

/// Registers the front-matter rule ahead of `table`.
///
/// Returns the handle that can later disable the rule.
pub fn register(ruler: &mut Ruler, options: FrontMatterOptions) -> Result<RuleHandle, RulerError> {
    ruler.before(
        "table",
        RULE_NAME,
        Box::new(FrontMatterRule::new(options)),
        &ALT_CHAINS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::Token;
    use pretty_assertions::assert_eq;

    fn run_rule(src: &str, silent: bool) -> (bool, Vec<Token>, usize, usize, ParentType) {
        let ruler = Ruler::new();
        let mut state = BlockState::from_source(src, &ruler);
        let end = state.line_max;
        let rule = FrontMatterRule::new(FrontMatterOptions::default());
        let matched = rule.run(&mut state, 0, end, silent);
        (
            matched,
            state.tokens,
            state.line,
            state.line_max,
            state.parent_type,
        )
    }

    #[test]
    fn emits_hidden_token_and_advances_cursor() {
        let (matched, tokens, line, line_max, parent) = run_rule("---\na: 1\n---\nBody", false);
        assert!(matched);
        assert_eq!(line, 3);
        assert_eq!(line_max, 4);
        assert_eq!(parent, ParentType::Root);

        assert_eq!(tokens.len(), 1);
        let token = &tokens[0];
        assert_eq!(token.kind, TokenKind::FrontMatter);
        assert!(token.hidden);
        assert_eq!(token.nesting, 0);
        assert_eq!(token.markup, "---");
        assert_eq!(token.meta, "a: 1");
        assert_eq!(token.map, Some([0, 3]));
    }

    #[test]
    fn dedent_closes_block_without_consuming_line() {
        let ruler = Ruler::new();
        let mut state = BlockState::from_source("---\n  a: 1\nb\n", &ruler);
        state.blk_indent = 2;
        let end = state.line_max;

        let rule = FrontMatterRule::new(FrontMatterOptions::default());
        assert!(rule.run(&mut state, 0, end, false));

        assert_eq!(state.line, 2);
        assert_eq!(state.line_max, 3);
        assert_eq!(state.parent_type, ParentType::Root);
        assert_eq!(state.tokens.len(), 1);
        assert_eq!(state.tokens[0].map, Some([0, 2]));
        assert_eq!(state.tokens[0].meta, "  a: 1");
    }

    #[test]
    fn end_marker_advances_past_marker_line() {
        let (matched, tokens, line, line_max, parent) = run_rule("---\na: 1\n...\nBody", false);
        assert!(matched);
        assert_eq!(line, 3);
        assert_eq!((line_max, parent), (4, ParentType::Root));
        assert_eq!(tokens[0].map, Some([0, 3]));
        assert_eq!(tokens[0].meta, "a: 1");
    }

    #[test]
    fn end_of_input_advances_to_end_line() {
        let (matched, tokens, line, _, _) = run_rule("---\nx: 1", false);
        assert!(matched);
        assert_eq!(line, 2);
        assert_eq!(tokens[0].map, Some([0, 2]));
    }

    #[test]
    fn silent_probe_never_mutates() {
        for src in ["---\na: 1\n---\n", "---\nunterminated", "no front matter"] {
            let (_, tokens, line, line_max, parent) = run_rule(src, true);
            assert!(tokens.is_empty());
            assert_eq!(line, 0);
            assert_eq!(parent, ParentType::Root);
            assert_eq!(line_max, src.lines().count());
        }
    }

    #[test]
    fn silent_probe_reports_opening_run() {
        assert!(run_rule("---\n", true).0);
        assert!(!run_rule("--\n", true).0);
    }

    #[test]
    fn decline_leaves_state_untouched() {
        let (matched, tokens, line, line_max, parent) = run_rule("Hello\n---\n", false);
        assert!(!matched);
        assert!(tokens.is_empty());
        assert_eq!((line, line_max, parent), (0, 2, ParentType::Root));
    }

    #[test]
    fn register_places_rule_before_table() {
        let mut ruler = Ruler::new();
        crate::parsing::blocks::kinds::install_defaults(&mut ruler).unwrap();
        let handle = register(&mut ruler, FrontMatterOptions::default()).unwrap();

        assert_eq!(handle.name(), RULE_NAME);
        assert_eq!(ruler.names()[0], RULE_NAME);
        assert_eq!(ruler.names()[1], "table");
    }

    #[test]
    fn register_requires_table_rule() {
        let mut ruler = Ruler::new();
        let err = register(&mut ruler, FrontMatterOptions::default()).unwrap_err();
        assert_eq!(err, RulerError::UnknownRule("table".into()));
    }
}
