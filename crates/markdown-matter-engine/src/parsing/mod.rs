pub mod blocks;
pub mod front_matter;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockState, Ruler, RulerError, Token, TokenKind, kinds, tokenize};
use front_matter::FrontMatterOptions;
use rope::{lines_with_spans, slice::slice_to_string, span::Span};

/// The front-matter block found in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterBlock {
    /// Opening marker run, e.g. `---`.
    pub markup: String,
    /// Raw text between the opening and closing marker lines.
    pub raw: String,
    /// Half-open line range the block occupies.
    pub map: [usize; 2],
}

#[derive(Debug)]
pub struct ParsedDoc {
    pub tokens: Vec<Token>,
    /// Number of physical lines in the source.
    pub line_count: usize,
    pub front_matter: Option<FrontMatterBlock>,
    /// Byte offset where each line starts, plus one entry for end of input.
    line_starts: Vec<usize>,
}

impl ParsedDoc {
    /// Byte offset of the first line after the front matter, or 0 when the
    /// document has none.
    pub fn body_start(&self) -> usize {
        match &self.front_matter {
            Some(fm) => self.line_starts[fm.map[1].min(self.line_starts.len() - 1)],
            None => 0,
        }
    }
}

/// Block-level tokenizer: a [`Ruler`] plus the loop that drives it.
pub struct BlockParser {
    ruler: Ruler,
}

impl BlockParser {
    /// A parser with the default rules and no front-matter support.
    pub fn new() -> Self {
        let mut ruler = Ruler::new();
        kinds::install_defaults(&mut ruler).expect("default rule names are distinct");
        Self { ruler }
    }

    /// A parser with the default rules plus the front-matter rule.
    pub fn with_front_matter(options: FrontMatterOptions) -> Result<Self, RulerError> {
        let mut parser = Self::new();
        front_matter::register(&mut parser.ruler, options)?;
        Ok(parser)
    }

    pub fn ruler(&self) -> &Ruler {
        &self.ruler
    }

    pub fn ruler_mut(&mut self) -> &mut Ruler {
        &mut self.ruler
    }

    pub fn parse(&self, rope: &Rope) -> ParsedDoc {
        let src = slice_to_string(
            rope,
            Span {
                start: 0,
                end: rope.len(),
            },
        );
        let lines: Vec<_> = lines_with_spans(rope).collect();

        let mut state = BlockState::new(&src, &lines, &self.ruler);
        let line_max = state.line_max;
        tokenize(&mut state, 0, line_max);

        let front_matter = state
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::FrontMatter)
            .map(|t| FrontMatterBlock {
                markup: t.markup.clone(),
                raw: t.meta.clone(),
                map: t.map.unwrap_or([0, 0]),
            });

        ParsedDoc {
            tokens: state.tokens,
            line_count: line_max,
            front_matter,
            line_starts: state.b_marks,
        }
    }

    pub fn parse_str(&self, src: &str) -> ParsedDoc {
        self.parse(&Rope::from(src))
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}
