//! Configuration loading for branch-guard
//!
//! Supports TOML configuration with embedded defaults, plus environment and
//! command line overrides for the protected branch list.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable holding a comma-separated protected branch list
pub const ENV_PROTECTED: &str = "BRANCH_GUARD_PROTECTED";

/// Environment variable that turns the guard off (decisions are still audited)
pub const ENV_DISABLED: &str = "BRANCH_GUARD_DISABLED";

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Tool names whose `command` is a shell command
    pub shell_tools: Vec<String>,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            shell_tools: vec!["Bash".to_string()],
            audit_log: false,
            audit_path: Some("~/.claude/branch-guard/audit.jsonl".to_string()),
        }
    }
}

/// Protected branch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BranchesConfig {
    /// Branches that may never be deleted, in display order
    pub protected: Vec<String>,
}

impl Default for BranchesConfig {
    fn default() -> Self {
        Self {
            protected: vec![
                "main".to_string(),
                "staging".to_string(),
                "development".to_string(),
            ],
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub branches: BranchesConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/branch-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/branch-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("branch-guard: failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the protected list from `BRANCH_GUARD_PROTECTED` when it is set
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(ENV_PROTECTED) {
            self.set_protected(&value);
        }
    }

    /// Replace the protected list from a comma-separated string
    ///
    /// Blank entries are dropped. A value with no usable entry leaves the
    /// current list untouched.
    pub fn set_protected(&mut self, list: &str) {
        let branches = parse_branch_list(list);
        if branches.is_empty() {
            eprintln!("branch-guard: ignoring empty protected branch list");
            return;
        }
        self.branches.protected = branches;
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if audit logging is on
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }
}

/// Check whether the guard is switched off through the environment
pub fn disabled_by_env() -> bool {
    std::env::var_os(ENV_DISABLED).is_some()
}

/// Split a comma-separated branch list, trimming whitespace
pub fn parse_branch_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
shell_tools = ["Bash"]
audit_log = false
audit_path = "~/.claude/branch-guard/audit.jsonl"

[branches]
protected = ["main", "staging", "development"]
"#;
