//! Hook adapter: raw stdin payload in, rendered response out
//!
//! Any input the adapter cannot decode is allowed with a diagnostic.

use crate::audit::{AuditEntry, AuditLogger};
use crate::engine::GuardEngine;
use crate::input::HookInput;
use crate::output::{HookOutput, OutputFormat, Verdict};

/// Run-time switches for one hook invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct HookOptions {
    pub format: OutputFormat,

    /// Report denials as warnings instead of blocking
    pub dry_run: bool,

    /// Allow everything (set through `BRANCH_GUARD_DISABLED`)
    pub disabled: bool,
}

/// Decode `raw`, evaluate it and render the response
pub fn respond(
    engine: &GuardEngine,
    raw: &str,
    options: HookOptions,
    logger: &mut AuditLogger,
) -> HookOutput {
    if raw.trim().is_empty() {
        return HookOutput::allow();
    }

    let input = match HookInput::from_json(raw) {
        Ok(input) => input,
        Err(e) => {
            if let Err(log_err) = logger.log(&AuditEntry::parse_error(&e.to_string())) {
                eprintln!("branch-guard: failed to write audit log: {}", log_err);
            }
            return HookOutput::allow_with_warning(format!(
                "branch-guard: invalid hook input (allowing): {}",
                e
            ));
        }
    };

    let verdict = if options.disabled {
        Verdict::Allow
    } else {
        engine.check(&input)
    };

    if let Err(e) = logger.log_verdict(&input, &verdict, options.dry_run, options.disabled) {
        eprintln!("branch-guard: failed to write audit log: {}", e);
    }

    if options.dry_run {
        HookOutput::dry_run(&verdict)
    } else {
        HookOutput::from_verdict(&verdict, options.format)
    }
}
