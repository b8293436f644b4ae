//! The ordered branch deletion policy table
//!
//! Patterns are matched case-insensitively anywhere in the command text.
//! Only the first (leftmost) match of each rule is considered.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::Rule;

/// Rules in evaluation order
pub const BRANCH_RULES: &[Rule] = &[
    // git branch -d <branch>, git branch -D <branch>, git branch --delete <branch>
    Rule::new(
        "git-branch-delete",
        r"git\s+branch\s+(?:-d|--delete)\s+(\S+)",
        "delete local branch",
    ),
    // git push origin --delete <branch>, git push -d <branch>
    Rule::new(
        "git-push-delete",
        r"git\s+push\s+(?:\S+\s+)?(?:--delete|-d)\s+(\S+)",
        "delete remote branch",
    ),
    // git push origin :<branch>
    Rule::new(
        "git-push-empty-refspec",
        r"git\s+push\s+\S+\s+:(\S+)",
        "delete remote branch",
    ),
    // gh pr merge <target> ... --delete-branch
    Rule::new(
        "gh-pr-merge-delete-branch",
        r"gh\s+pr\s+merge\s+(\S+)\s+.*--delete-branch",
        "delete branch via PR merge",
    ),
];

/// A rule paired with its compiled, case-insensitive regex
#[derive(Debug)]
pub struct CompiledRule {
    pub rule: &'static Rule,
    regex: Regex,
}

impl CompiledRule {
    fn compile(rule: &'static Rule) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("(?i){}", rule.pattern))?;
        Ok(Self { rule, regex })
    }

    /// Branch captured by the first match of this rule, if any
    pub fn target<'a>(&self, command: &'a str) -> Option<&'a str> {
        self.regex
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn id(&self) -> &'static str {
        self.rule.id
    }

    pub fn description(&self) -> &'static str {
        self.rule.description
    }
}

static COMPILED: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    BRANCH_RULES
        .iter()
        .filter_map(|rule| match CompiledRule::compile(rule) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                // A rule that fails to compile can only be skipped (fail open)
                eprintln!("branch-guard: invalid pattern for rule {}: {}", rule.id, e);
                None
            }
        })
        .collect()
});

/// The compiled policy table, built once per process
pub fn compiled_rules() -> &'static [CompiledRule] {
    &COMPILED
}
