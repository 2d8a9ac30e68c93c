//! Flat `key: value` decoding of raw front-matter text.
//!
//! This is deliberately lenient: lines that do not look like `key: value`
//! are dropped without error. Values are either a single string or, when
//! written as `[a, b, c]`, a list of strings. Nothing is nested or typed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A decoded front-matter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::Text(_) => None,
            MetaValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<Vec<&str>> for MetaValue {
    fn from(items: Vec<&str>) -> Self {
        MetaValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Decoded front matter, keyed by field name in document order.
pub type Metadata = IndexMap<String, MetaValue>;

/// Decodes raw front-matter text into [`Metadata`].
///
/// Each line is split on its first colon. Lines without a colon, or with an
/// empty key or value after trimming, are skipped. A repeated key keeps its
/// first position and its last value.
pub fn decode(raw: &str) -> Metadata {
    let mut out = Metadata::new();
    for (n, line) in raw.lines().enumerate() {
        match decode_line(line) {
            Some((key, value)) => {
                out.insert(key.to_string(), value);
            }
            None => {
                if !line.trim().is_empty() {
                    log::trace!("front matter line {} skipped: {line:?}", n + 1);
                }
            }
        }
    }
    out
}

fn decode_line(line: &str) -> Option<(&str, MetaValue)> {
    let (key, value) = line.split_once(':')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, decode_value(value)))
}

fn decode_value(value: &str) -> MetaValue {
    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => MetaValue::List(inner.split(',').map(|item| item.trim().to_string()).collect()),
        None => MetaValue::Text(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn decodes_strings_and_lists() {
        let meta = decode("title: Hello World\ntags: [a, b, c]\n");
        assert_eq!(meta.len(), 2);
        assert_eq!(meta["title"], MetaValue::from("Hello World"));
        assert_eq!(meta["tags"], MetaValue::from(vec!["a", "b", "c"]));
    }

    #[rstest]
    #[case::no_colon("just text")]
    #[case::empty_key(": value")]
    #[case::empty_value("key:")]
    #[case::blank_value("key:    ")]
    #[case::blank("")]
    fn malformed_lines_are_dropped(#[case] line: &str) {
        assert!(decode(line).is_empty());
    }

    #[test]
    fn splits_on_first_colon_only() {
        let meta = decode("url: https://example.com:8080/x");
        assert_eq!(meta["url"].as_text(), Some("https://example.com:8080/x"));
    }

    #[test]
    fn last_occurrence_wins() {
        let meta = decode("a: 1\na: 2");
        assert_eq!(meta["a"].as_text(), Some("2"));
    }

    #[test]
    fn list_items_are_trimmed_and_kept_in_order() {
        let meta = decode("tags: [ z ,y,  x ]");
        assert_eq!(
            meta["tags"].as_list(),
            Some(&["z".to_string(), "y".to_string(), "x".to_string()][..])
        );
    }

    #[test]
    fn empty_brackets_hold_one_empty_item() {
        let meta = decode("tags: []");
        assert_eq!(meta["tags"], MetaValue::List(vec!["".into()]));
    }

    #[test]
    fn trailing_comma_keeps_empty_item() {
        let meta = decode("tags: [a,]");
        assert_eq!(meta["tags"], MetaValue::from(vec!["a", ""]));
    }

    #[test]
    fn keys_keep_document_order() {
        let meta = decode("title: T
author: A
date: D
title: T2");
        let keys: Vec<&str> = meta.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "author", "date"]);
        assert_eq!(meta["title"].as_text(), Some("T2"));
    }

    #[test]
    fn unbalanced_brackets_stay_text() {
        let meta = decode("a: [x, y\nb: x]");
        assert_eq!(meta["a"].as_text(), Some("[x, y"));
        assert_eq!(meta["b"].as_text(), Some("x]"));
    }

    #[test]
    fn crlf_lines_decode() {
        let meta = decode("a: 1\r\nb: 2\r\n");
        assert_eq!(meta["a"].as_text(), Some("1"));
        assert_eq!(meta["b"].as_text(), Some("2"));
    }

    #[test]
    fn serializes_untagged() {
        let meta = decode("z: 1\ntags: [x, y]");
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"z":"1","tags":["x","y"]}"#);
    }
}
