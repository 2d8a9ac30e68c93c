use crate::parsing::blocks::{
    ruler::BlockRule,
    state::BlockState,
    token::TokenKind,
};
use crate::parsing::rope::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    pub fn fence_char(kind: FenceKind) -> char {
        match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }

    /// A closing fence carries the same fence character and nothing else.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        let t = line.trim_end();
        matches!(
            (kind, Self::sig(t)),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        ) && t.chars().all(|c| c == Self::fence_char(kind))
    }
}

/// Fenced code blocks are raw zones: no other rule runs on their lines.
pub struct FenceRule;

impl BlockRule for FenceRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }
        let opener = state.line_text(start_line);
        let Some(sig) = CodeFence::sig(opener) else {
            return false;
        };
        if silent {
            return true;
        }

        let kind = CodeFence::kind(sig);
        let fence = CodeFence::fence_char(kind);
        let run_len = opener.chars().take_while(|c| *c == fence).count();

        let mut next_line = start_line;
        let mut closed = false;
        loop {
            next_line += 1;
            if next_line >= end_line {
                break;
            }
            if !state.is_empty(next_line) && state.s_count[next_line] < state.blk_indent {
                break;
            }
            if !state.is_code_indented(next_line)
                && CodeFence::closes(kind, state.line_text(next_line))
            {
                closed = true;
                break;
            }
        }

        let content = Span::new(state.b_marks[start_line + 1], state.b_marks[next_line]).slice(state.src);
        let consumed = next_line + usize::from(closed);

        let token = state.push(TokenKind::Fence, 0);
        token.markup = opener[..run_len].to_string();
        token.meta = opener[run_len..].trim().to_string();
        token.content = content.to_string();
        token.map = Some([start_line, consumed]);

        state.line = consumed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceSig::Backticks));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~"), Some(FenceSig::Tildes));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(FenceKind::Backticks, "```"));
        assert!(CodeFence::closes(FenceKind::Tildes, "~~~~  "));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(!CodeFence::closes(FenceKind::Backticks, "~~~"));
        assert!(!CodeFence::closes(FenceKind::Tildes, "```"));
    }

    #[test]
    fn info_string_does_not_close() {
        assert!(!CodeFence::closes(FenceKind::Backticks, "```rust"));
    }
}
