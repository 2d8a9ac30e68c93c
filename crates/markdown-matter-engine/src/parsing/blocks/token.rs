use serde::Serialize;

/// The kind of block a [`Token`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// Leading metadata block; always hidden.
    FrontMatter,
    Table,
    /// A fenced code block (``` or ~~~).
    Fence,
    BlockQuote,
    /// Thematic break (`---`, `***`, `___`).
    Hr,
    /// ATX heading with its level (1-6).
    Heading {
        level: u8,
    },
    /// A paragraph block (default when no other block rule matches).
    Paragraph,
}

/// One entry in the block token stream.
///
/// Mirrors the shape consumed by downstream renderers: `map` is the half-open
/// line range `[start, end)` the token occupies, which keeps line accounting
/// consistent for every rule that runs after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 1 opens, 0 self-closing, -1 closes.
    pub nesting: i8,
    /// Raw delimiter text (`---`, ```` ``` ````, `#`...).
    pub markup: String,
    /// Rule-specific payload. For front matter: the raw metadata body.
    pub meta: String,
    /// Text content for leaf blocks.
    pub content: String,
    pub map: Option<[usize; 2]>,
    /// Hidden tokens are skipped when rendering.
    pub hidden: bool,
    pub block: bool,
}

impl Token {
    pub fn new(kind: TokenKind, nesting: i8) -> Self {
        Self {
            kind,
            nesting,
            markup: String::new(),
            meta: String::new(),
            content: String::new(),
            map: None,
            hidden: false,
            block: true,
        }
    }
}
