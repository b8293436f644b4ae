//! Branch deletion rules for branch-guard
//!
//! Each rule recognises one shape of command that deletes a git branch and
//! captures the name of the branch it would delete.

pub mod branch;

pub use branch::{compiled_rules, CompiledRule, BRANCH_RULES};

/// A branch deletion rule definition
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern with exactly one capture group: the targeted branch
    pub pattern: &'static str,

    /// Operation name used in the block reason ("delete local branch")
    pub description: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(id: &'static str, pattern: &'static str, description: &'static str) -> Self {
        Self {
            id,
            pattern,
            description,
        }
    }
}
