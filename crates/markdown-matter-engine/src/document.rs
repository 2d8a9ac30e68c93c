//! Document-level convenience: split a markdown file into decoded front
//! matter and its body.

use pulldown_cmark::{Parser, html};
use serde::{Deserialize, Serialize};

use crate::{
    metadata::{self, Metadata},
    parsing::{BlockParser, front_matter::FrontMatterOptions},
};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A markdown document split into metadata and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMarkdown {
    pub front_matter: Metadata,
    /// Everything after the front-matter block, trimmed.
    pub markdown_body: String,
}

/// Wraps an injected [`BlockParser`]; the parser decides whether and how
/// front matter is recognised.
pub struct MarkdownParser {
    parser: BlockParser,
}

impl MarkdownParser {
    pub fn new(parser: BlockParser) -> Self {
        Self { parser }
    }

    pub fn block_parser(&self) -> &BlockParser {
        &self.parser
    }

    /// Splits `content` into decoded front matter and body.
    ///
    /// Without a front-matter block the metadata is empty and the body is
    /// the whole trimmed document.
    pub fn render(&self, content: &str) -> ParsedMarkdown {
        let doc = self.parser.parse_str(content);
        let front_matter = doc
            .front_matter
            .as_ref()
            .map(|fm| metadata::decode(&fm.raw))
            .unwrap_or_default();
        let body = content.get(doc.body_start()..).unwrap_or_default();

        ParsedMarkdown {
            front_matter,
            markdown_body: body.trim().to_string(),
        }
    }

    /// Like [`render`](Self::render), validating UTF-8 first.
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<ParsedMarkdown, DocumentError> {
        let content = std::str::from_utf8(bytes)?;
        Ok(self.render(content))
    }

    /// Renders as indented JSON (two spaces).
    pub fn to_json(&self, content: &str) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.render(content))?)
    }

    pub fn to_json_compact(&self, content: &str) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(&self.render(content))?)
    }

    /// Renders the body as HTML. Front matter never reaches the output.
    ///
    /// HTML comes from `pulldown-cmark` over the stripped body; the block
    /// token stream is only used to locate the front matter.
    pub fn render_html(&self, content: &str) -> String {
        let parsed = self.render(content);
        let mut out = String::new();
        html::push_html(&mut out, Parser::new(&parsed.markdown_body));
        out
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        let parser = BlockParser::with_front_matter(FrontMatterOptions::default())
            .expect("default ruler has a table rule");
        Self::new(parser)
    }
}
