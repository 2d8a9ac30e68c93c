//! Ordered, named registry of block rules.
//!
//! Rules run in registration order; the first one that returns `true` claims
//! the lines it consumed. A rule may also list alternate chains (`alt`) it
//! belongs to, e.g. the `paragraph` chain is probed in silent mode to decide
//! whether a paragraph is interrupted.

use super::state::BlockState;

/// A block-level rule.
///
/// `run` inspects `state` starting at `start_line` (never past `end_line`).
/// In silent mode it must only report whether it would match, without
/// touching the token stream or the line cursor. Otherwise, on a match it
/// pushes its tokens, advances `state.line` past the consumed lines and
/// returns `true`.
pub trait BlockRule {
    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulerError {
    #[error("No block rule named '{0}'")]
    UnknownRule(String),
    #[error("A block rule named '{0}' is already registered")]
    DuplicateRule(String),
}

/// Capability returned by registration; lets the owner toggle its rule later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHandle {
    name: String,
}

impl RuleHandle {
    pub fn name(&self) -> &str {
        &self.name
    }
}

struct RuleEntry {
    name: String,
    alt: Vec<String>,
    enabled: bool,
    rule: Box<dyn BlockRule>,
}

#[derive(Default)]
pub struct Ruler {
    rules: Vec<RuleEntry>,
}

impl Ruler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule at the lowest priority.
    pub fn push(
        &mut self,
        name: &str,
        rule: Box<dyn BlockRule>,
        alt: &[&str],
    ) -> Result<RuleHandle, RulerError> {
        self.insert_at(self.rules.len(), name, rule, alt)
    }

    /// Inserts a rule directly before the rule named `anchor`.
    pub fn before(
        &mut self,
        anchor: &str,
        name: &str,
        rule: Box<dyn BlockRule>,
        alt: &[&str],
    ) -> Result<RuleHandle, RulerError> {
        let idx = self
            .index_of(anchor)
            .ok_or_else(|| RulerError::UnknownRule(anchor.to_string()))?;
        self.insert_at(idx, name, rule, alt)
    }

    pub fn set_enabled(&mut self, handle: &RuleHandle, enabled: bool) -> Result<(), RulerError> {
        let idx = self
            .index_of(&handle.name)
            .ok_or_else(|| RulerError::UnknownRule(handle.name.clone()))?;
        self.rules[idx].enabled = enabled;
        Ok(())
    }

    /// Enabled rules for a chain: every rule for `""`, otherwise the rules
    /// whose `alt` list names `chain`.
    pub fn chain<'r>(&'r self, chain: &'r str) -> impl Iterator<Item = &'r dyn BlockRule> + 'r {
        self.rules
            .iter()
            .filter(move |r| r.enabled && (chain.is_empty() || r.alt.iter().any(|a| a == chain)))
            .map(|r| r.rule.as_ref())
    }

    /// Rule names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.name == name)
    }

    fn insert_at(
        &mut self,
        idx: usize,
        name: &str,
        rule: Box<dyn BlockRule>,
        alt: &[&str],
    ) -> Result<RuleHandle, RulerError> {
        if self.index_of(name).is_some() {
            return Err(RulerError::DuplicateRule(name.to_string()));
        }
        self.rules.insert(
            idx,
            RuleEntry {
                name: name.to_string(),
                alt: alt.iter().map(|a| a.to_string()).collect(),
                enabled: true,
                rule,
            },
        );
        Ok(RuleHandle {
            name: name.to_string(),
        })
    }
}
