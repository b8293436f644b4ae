//! JSONL audit logging for branch-guard
//!
//! Records every decision to a JSONL file for later analysis. Logging is
//! best effort: a failure to write never changes a decision.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::HookInput;
use crate::output::Verdict;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    DryRun,
    Disabled,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    /// Tool that was invoked
    pub tool: String,

    /// Rule ID that matched (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    pub input_summary: String,

    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from input and verdict
    pub fn new(input: &HookInput, verdict: &Verdict, dry_run: bool, disabled: bool) -> Self {
        let (level, rule_id, reason) = if disabled {
            (LogLevel::Disabled, None, crate::config::ENV_DISABLED.to_string())
        } else {
            match verdict {
                Verdict::Allow => (LogLevel::Allowed, None, "no protected branch targeted".to_string()),
                Verdict::Deny { rule_id, reason } => {
                    let level = if dry_run { LogLevel::DryRun } else { LogLevel::Blocked };
                    (level, Some(rule_id.clone()), reason.clone())
                }
            }
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: input.tool_name.clone(),
            rule_id,
            input_summary: input.summary(),
            reason,
            session_id: input.session_id.clone(),
        }
    }

    /// Entry for a payload that could not be decoded
    pub fn parse_error(error: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            tool: String::new(),
            rule_id: None,
            input_summary: "(undecodable input)".to_string(),
            reason: error.to_string(),
            session_id: None,
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` or an unopenable path disables it
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("branch-guard: cannot create {}: {}", parent.display(), e);
                }
            }

            match OpenOptions::new().create(true).append(true).open(p) {
                Ok(file) => Some(BufWriter::new(file)),
                Err(e) => {
                    eprintln!("branch-guard: cannot open audit log {}: {}", p.display(), e);
                    None
                }
            }
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a verdict
    pub fn log_verdict(
        &mut self,
        input: &HookInput,
        verdict: &Verdict,
        dry_run: bool,
        disabled: bool,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(input, verdict, dry_run, disabled);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
