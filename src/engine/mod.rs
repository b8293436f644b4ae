//! Decision engine for branch-guard
//!
//! Evaluates a proposed shell command against the branch deletion rules and
//! the protected branch list. Evaluation is a pure function of its inputs.

use crate::config::Config;
use crate::input::HookInput;
use crate::output::Verdict;
use crate::rules::{compiled_rules, CompiledRule};

/// Kind of resource named in block reasons
const RESOURCE_KIND: &str = "branches";

/// The branch protection engine
#[derive(Debug, Clone)]
pub struct GuardEngine {
    protected: Vec<String>,
    shell_tools: Vec<String>,
    rules: &'static [CompiledRule],
}

impl GuardEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: &Config) -> Self {
        Self {
            protected: config.branches.protected.clone(),
            shell_tools: config.general.shell_tools.clone(),
            rules: compiled_rules(),
        }
    }

    /// Check a decoded hook payload
    pub fn check(&self, input: &HookInput) -> Verdict {
        self.evaluate(&input.tool_name, input.command())
    }

    /// Decide whether `command`, about to run through `tool_name`, may proceed
    ///
    /// Every rule is tried in order. A rule whose first match targets an
    /// unprotected branch does not stop evaluation; the first rule that
    /// targets a protected branch produces the Deny.
    pub fn evaluate(&self, tool_name: &str, command: &str) -> Verdict {
        if !self.is_shell_tool(tool_name) || command.is_empty() {
            return Verdict::Allow;
        }

        for rule in self.rules {
            let Some(branch) = rule.target(command) else {
                continue;
            };

            if self.is_protected(branch) {
                return Verdict::deny(rule.id(), self.block_reason(rule.description(), branch));
            }
        }

        Verdict::Allow
    }

    /// Exact, case-sensitive membership in the protected list
    pub fn is_protected(&self, branch: &str) -> bool {
        self.protected.iter().any(|p| p == branch)
    }

    pub fn is_shell_tool(&self, tool_name: &str) -> bool {
        self.shell_tools.iter().any(|t| t == tool_name)
    }

    /// Get the protected branch list
    pub fn protected(&self) -> &[String] {
        &self.protected
    }

    fn block_reason(&self, description: &str, branch: &str) -> String {
        format!(
            "BLOCKED: Cannot {} '{}'. Protected {}: {}",
            description,
            branch,
            RESOURCE_KIND,
            self.protected.join(", ")
        )
    }
}

impl Default for GuardEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
