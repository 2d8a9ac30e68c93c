pub mod document;
pub mod io;
pub mod metadata;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{DocumentError, MarkdownParser, ParsedMarkdown};
pub use metadata::{MetaValue, Metadata, decode};
pub use parsing::{
    BlockParser, FrontMatterBlock, ParsedDoc,
    front_matter::{FrontMatterOptions, OptionsError},
};
