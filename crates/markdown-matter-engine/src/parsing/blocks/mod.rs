//! # Block Parsing
//!
//! A line-oriented rule pipeline in the markdown-it mould.
//!
//! ## Parsing Phases
//!
//! 1. **Line maps** (`state`): `BlockState` derives per-line start/end offsets
//!    and indentation from the source once, up front
//!
//! 2. **Rule dispatch** (`builder`): `tokenize` walks the lines and offers each
//!    one to the rules of a `Ruler` in priority order; the first rule to claim a
//!    line pushes its tokens and advances the cursor
//!
//! ## Modules
//!
//! - **`token`**: `Token` and `TokenKind`, the pipeline output
//! - **`state`**: `BlockState` line maps plus `ScopedContext` save/restore
//! - **`ruler`**: `BlockRule` trait and the named `Ruler` registry
//! - **`kinds`**: Block-specific rules with owned delimiters (fence, quote, table...)
//! - **`builder`**: `tokenize` dispatch loop
//!
//! ## Key Invariants
//!
//! - Every token `map` is a half-open line range; maps never overlap
//! - Fenced code blocks are raw zones: no other rule runs inside them
//! - A rule that declines leaves the state untouched

pub mod builder;
pub mod kinds;
pub mod ruler;
pub mod state;
pub mod token;

pub use builder::tokenize;
pub use ruler::{BlockRule, RuleHandle, Ruler, RulerError};
pub use state::{BlockState, ParentType, ScopedContext};
pub use token::{Token, TokenKind};
