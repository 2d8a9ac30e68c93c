pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::{BlockQuote, BlockQuoteRule};
pub use code_fence::{CodeFence, FenceKind, FenceRule, FenceSig};
pub use heading::{Heading, HeadingRule};
pub use paragraph::{Paragraph, ParagraphRule};
pub use table::{Table, TableRule};
pub use thematic_break::{HrRule, ThematicBreak};

use super::ruler::{Ruler, RulerError};

/// Installs the default rules in priority order.
pub fn install_defaults(ruler: &mut Ruler) -> Result<(), RulerError> {
    ruler.push("table", Box::new(TableRule), &["paragraph", "reference"])?;
    ruler.push(
        "fence",
        Box::new(FenceRule),
        &["paragraph", "reference", "blockquote", "list"],
    )?;
    ruler.push(
        "blockquote",
        Box::new(BlockQuoteRule),
        &["paragraph", "reference", "blockquote", "list"],
    )?;
    ruler.push(
        "hr",
        Box::new(HrRule),
        &["paragraph", "reference", "blockquote", "list"],
    )?;
    ruler.push(
        "heading",
        Box::new(HeadingRule),
        &["paragraph", "reference", "blockquote"],
    )?;
    ruler.push("paragraph", Box::new(ParagraphRule), &[])?;
    Ok(())
}
