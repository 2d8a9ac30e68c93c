use std::fmt::Write;

use crate::parsing::{
    blocks::{Token, TokenKind},
    rope::preview,
};

/// Renders tokens as one line each: kind, line map, then the interesting
/// payload (markup, meta, truncated content).
///
/// Newlines in payloads are shown as `\n` so every token stays on one line.
pub fn outline(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        let kind = match t.kind {
            TokenKind::FrontMatter => "front_matter".to_string(),
            TokenKind::Table => "table".to_string(),
            TokenKind::Fence => "fence".to_string(),
            TokenKind::BlockQuote => "blockquote".to_string(),
            TokenKind::Hr => "hr".to_string(),
            TokenKind::Heading { level } => format!("heading{level}"),
            TokenKind::Paragraph => "paragraph".to_string(),
        };
        let _ = write!(out, "{kind}");
        if let Some([start, end]) = t.map {
            let _ = write!(out, " [{start}, {end})");
        }
        if t.hidden {
            out.push_str(" hidden");
        }
        if !t.markup.is_empty() {
            let _ = write!(out, " markup={}", t.markup);
        }
        if !t.meta.is_empty() {
            let _ = write!(out, " meta={}", escape(&t.meta));
        }
        if !t.content.is_empty() {
            let _ = write!(out, " content={}", escape(&preview(&t.content, 40)));
        }
        out.push('\n');
    }
    out
}

fn escape(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}
