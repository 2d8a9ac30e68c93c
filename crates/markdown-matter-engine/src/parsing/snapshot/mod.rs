//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a token stream as a stable text outline for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (maps in bounds,
//!   ordered, non-overlapping)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
