//! Compatibility checks.
//!
//! Checks are declared as ordered lists of [`CheckDef`] entries. Evaluating a
//! list yields one [`Check`] per applicable entry, and the failure messages
//! of a list keep its declaration order no matter which checks pass.
//!
//! # Modules
//!
//! - [`catalog`] - The requirement and recommendation lists
//! - [`rule`] - Predicates and failure messages
//! - [`thresholds`] - Fixed minimums

pub mod catalog;
pub mod rule;
pub mod thresholds;

pub use catalog::{RECOMMENDATIONS, REQUIREMENTS};
pub use rule::{Reminder, Rule};

use crate::environment::{Capability, RuntimeInspector};
use serde::Serialize;
use std::fmt;

/// Which report list a check feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Must be fixed.
    Requirement,
    /// Suggested, or to be verified by hand.
    Recommendation,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Requirement => f.write_str("requirement"),
            CheckKind::Recommendation => f.write_str("recommendation"),
        }
    }
}

/// A declared check.
#[derive(Debug, Clone, Copy)]
pub struct CheckDef {
    /// Stable identifier, e.g. `memory_limit`.
    pub id: &'static str,
    /// The predicate and its message.
    pub rule: Rule,
    /// Only evaluate when this capability is present.
    pub requires: Option<Capability>,
}

impl CheckDef {
    /// A check that always applies.
    pub const fn new(id: &'static str, rule: Rule) -> Self {
        Self {
            id,
            rule,
            requires: None,
        }
    }

    /// A check that only applies when `capability` is present.
    pub const fn when(mut self, capability: Capability) -> Self {
        self.requires = Some(capability);
        self
    }

    /// Whether this check applies to the environment at all.
    pub fn applies(&self, env: &dyn RuntimeInspector) -> bool {
        self.requires.is_none_or(|cap| env.has_capability(cap))
    }

    /// Evaluate the check, or `None` when it does not apply.
    pub fn evaluate(&self, env: &dyn RuntimeInspector) -> Option<Check> {
        if !self.applies(env) {
            return None;
        }
        let passed = self.rule.passes(env);
        Some(Check {
            id: self.id,
            passed,
            message: self.rule.message(env),
        })
    }
}

/// The outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    /// Identifier of the check that produced this.
    pub id: &'static str,
    /// Whether the environment satisfies the check.
    pub passed: bool,
    /// Message to show when it does not.
    pub message: String,
}

/// Append `message` to `messages` unless the check passed.
pub fn append_if_failed(mut messages: Vec<String>, passed: bool, message: String) -> Vec<String> {
    if !passed {
        messages.push(message);
    }
    messages
}

/// Evaluate every applicable check in declaration order.
pub fn evaluate_all(defs: &[CheckDef], env: &dyn RuntimeInspector) -> Vec<Check> {
    defs.iter().filter_map(|def| def.evaluate(env)).collect()
}

/// Collect the failure messages of `defs`, in declaration order.
pub fn failed_messages(defs: &[CheckDef], env: &dyn RuntimeInspector) -> Vec<String> {
    evaluate_all(defs, env)
        .into_iter()
        .fold(Vec::new(), |messages, check| {
            append_if_failed(messages, check.passed, check.message)
        })
}
