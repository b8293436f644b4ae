//! branch-guard - keeps automated agents from deleting protected git branches
//!
//! This library backs a PreToolUse hook: it inspects a shell command an agent
//! is about to run and blocks it when it would delete a protected branch.
//!
//! # Features
//!
//! - **Branch deletion rules**: `git branch -d/-D/--delete`, `git push --delete`,
//!   `git push <remote> :<branch>`, and `gh pr merge <target> ... --delete-branch`
//! - **Configurable protected list**: TOML file, `--protected` flag or
//!   `BRANCH_GUARD_PROTECTED`
//! - **Fail open**: undecodable input and unknown tools are always allowed
//! - **Audit logging**: optional JSONL log of all decisions
//!
//! # Example
//!
//! ```
//! use branch_guard::{Config, GuardEngine};
//!
//! let engine = GuardEngine::new(&Config::default());
//!
//! let verdict = engine.evaluate("Bash", "git push origin --delete staging");
//! assert!(verdict.is_deny());
//!
//! assert!(engine.evaluate("Bash", "git branch -d feature/foo").is_allow());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::GuardEngine;
pub use error::{GuardError, Result};
pub use hook::{respond, HookOptions};
pub use input::HookInput;
pub use output::{HookOutput, OutputFormat, Verdict};
