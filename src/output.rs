//! Verdicts and their translation into hook responses
//!
//! The engine produces a [`Verdict`]; [`HookOutput`] turns it into the exit
//! status, stderr text and optional JSON that the host agent reads.

use serde::Serialize;

/// Exit status that lets the tool call proceed
pub const EXIT_ALLOW: i32 = 0;

/// Exit status that blocks the tool call; stderr is shown to the agent
pub const EXIT_BLOCK: i32 = 2;

/// Decision result from the guard engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Let the command run
    Allow,

    /// Block the command
    Deny { rule_id: String, reason: String },
}

impl Verdict {
    /// Create a deny verdict
    pub fn deny(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Verdict::Deny {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an allow verdict
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// Check if this is a deny verdict
    pub fn is_deny(&self) -> bool {
        matches!(self, Verdict::Deny { .. })
    }

    /// Get the rule ID if applicable
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Verdict::Allow => None,
            Verdict::Deny { rule_id, .. } => Some(rule_id),
        }
    }

    /// Get the block reason if applicable
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Allow => None,
            Verdict::Deny { reason, .. } => Some(reason),
        }
    }
}

/// How the adapter reports a verdict to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Exit status 2 with the reason on stderr
    #[default]
    Exit,

    /// Exit status 0 with a `hookSpecificOutput` JSON document on stdout
    Json,
}

impl OutputFormat {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exit" => Some(OutputFormat::Exit),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// JSON document for hosts that read structured hook output
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// Hook-specific output with permission decision
#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,

    /// "allow" or "deny"
    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,

    #[serde(rename = "permissionDecisionReason", skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
}

/// Fully rendered response: what to print and how to exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutput {
    pub exit_code: i32,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl HookOutput {
    /// Allow silently
    pub fn allow() -> Self {
        HookOutput {
            exit_code: EXIT_ALLOW,
            stdout: None,
            stderr: None,
        }
    }

    /// Allow, but leave a diagnostic on stderr
    pub fn allow_with_warning(message: impl Into<String>) -> Self {
        HookOutput {
            exit_code: EXIT_ALLOW,
            stdout: None,
            stderr: Some(message.into()),
        }
    }

    /// Render a verdict in the requested format
    pub fn from_verdict(verdict: &Verdict, format: OutputFormat) -> Self {
        match (verdict, format) {
            (Verdict::Allow, _) => HookOutput::allow(),
            (Verdict::Deny { reason, .. }, OutputFormat::Exit) => HookOutput {
                exit_code: EXIT_BLOCK,
                stdout: None,
                stderr: Some(reason.clone()),
            },
            (Verdict::Deny { reason, .. }, OutputFormat::Json) => {
                let doc = JsonOutput {
                    hook_specific_output: HookSpecificOutput {
                        hook_event_name: "PreToolUse".to_string(),
                        permission_decision: "deny".to_string(),
                        permission_decision_reason: Some(reason.clone()),
                    },
                };
                match serde_json::to_string(&doc) {
                    Ok(json) => HookOutput {
                        exit_code: EXIT_ALLOW,
                        stdout: Some(json),
                        stderr: None,
                    },
                    // Fall back to the exit-status protocol, which cannot fail
                    Err(_) => HookOutput::from_verdict(verdict, OutputFormat::Exit),
                }
            }
        }
    }

    /// Report a deny as a warning without blocking
    pub fn dry_run(verdict: &Verdict) -> Self {
        match verdict.reason() {
            Some(reason) => HookOutput::allow_with_warning(format!("branch-guard (dry run): {}", reason)),
            None => HookOutput::allow(),
        }
    }

    /// Check if this response blocks the tool call
    pub fn is_blocking(&self) -> bool {
        self.exit_code == EXIT_BLOCK
            || self
                .stdout
                .as_deref()
                .is_some_and(|s| s.contains(r#""permissionDecision":"deny""#))
    }
}
