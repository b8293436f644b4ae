//! Input parsing for the PreToolUse hook JSON payload
//!
//! Every field is optional: a payload missing `tool_name` or `tool_input`
//! still decodes, and simply evaluates to Allow.

use serde::Deserialize;

use crate::error::Result;

/// Longest command kept verbatim in audit summaries
const SUMMARY_MAX_CHARS: usize = 100;

/// Main input structure sent by the host agent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read")
    #[serde(default)]
    pub tool_name: String,

    /// Tool-specific parameters, kept raw
    #[serde(default)]
    pub tool_input: serde_json::Value,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    #[serde(default)]
    pub hook_event_name: Option<String>,
}

impl HookInput {
    /// Build an input for a shell command, mostly useful in tests
    pub fn bash(command: &str) -> Self {
        HookInput {
            tool_name: "Bash".to_string(),
            tool_input: serde_json::json!({ "command": command }),
            ..Default::default()
        }
    }

    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `command` field of `tool_input`, or "" when absent or not a string
    pub fn command(&self) -> &str {
        self.tool_input
            .get("command")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        let command = self.command();
        if command.is_empty() {
            return format!("{}: (no command)", self.tool_name);
        }

        let truncated = if command.chars().count() > SUMMARY_MAX_CHARS {
            let head: String = command.chars().take(SUMMARY_MAX_CHARS).collect();
            format!("{}...", head)
        } else {
            command.to_string()
        };
        format!("{}: {}", self.tool_name, truncated)
    }
}
