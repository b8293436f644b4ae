//! branch-guard - blocks deletion of protected git branches
//!
//! Reads one PreToolUse payload from stdin and signals the decision through
//! its exit status (0 allow, 2 block, reason on stderr).
//!
//! # Usage
//!
//! ```bash
//! echo '{"tool_name":"Bash","tool_input":{"command":"git branch -D main"}}' | branch-guard
//!
//! # Override the protected branches
//! branch-guard --protected=main,release
//!
//! # Report but never block
//! branch-guard --dry-run
//! ```

use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use branch_guard::{
    audit::AuditLogger,
    config::{self, Config},
    engine::GuardEngine,
    hook::{self, HookOptions},
    output::{HookOutput, OutputFormat},
};

/// Print version information
fn print_version() {
    println!("branch-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"branch-guard - blocks deletion of protected git branches

USAGE:
    branch-guard [OPTIONS] < payload.json

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file
    -p, --protected LIST    Comma-separated protected branches
    -d, --dry-run           Warn about deletions but never block
    -f, --format FORMAT     Response format: exit (default) or json

ENVIRONMENT:
    BRANCH_GUARD_PROTECTED=a,b   Override protected branches
    BRANCH_GUARD_DISABLED=1      Allow everything (still audited)

EXIT STATUS:
    0   Allow (or json format, decision on stdout)
    2   Block; the reason is printed on stderr

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Bash",
          "hooks": [{{ "type": "command", "command": "branch-guard" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
    protected: Option<String>,
    dry_run: bool,
    format: OutputFormat,
}

impl Args {
    fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1).collect())
    }

    fn parse_from(args: Vec<String>) -> Self {
        let mut result = Args {
            help: false,
            version: false,
            config_path: None,
            protected: None,
            dry_run: false,
            format: OutputFormat::default(),
        };

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "-c" | "--config" => result.config_path = iter.next(),
                "-p" | "--protected" => result.protected = iter.next(),
                "-f" | "--format" => {
                    if let Some(value) = iter.next() {
                        result.set_format(&value);
                    }
                }
                other => {
                    if let Some(path) = other.strip_prefix("--config=") {
                        result.config_path = Some(path.to_string());
                    } else if let Some(list) = other.strip_prefix("--protected=") {
                        result.protected = Some(list.to_string());
                    } else if let Some(value) = other.strip_prefix("--format=") {
                        result.set_format(value);
                    }
                }
            }
        }

        result
    }

    fn set_format(&mut self, value: &str) {
        match OutputFormat::parse(value) {
            Some(format) => self.format = format,
            None => eprintln!("branch-guard: unknown format '{}', using exit", value),
        }
    }
}

fn load_config(args: &Args) -> Config {
    let mut config = match args.config_path {
        Some(ref path) => Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("branch-guard: failed to load config from {}: {}", path, e);
            Config::default()
        }),
        None => Config::load(),
    };

    // Precedence: flag, then environment, then file
    config.apply_env();
    if let Some(ref list) = args.protected {
        config.set_protected(list);
    }

    config
}

fn emit(output: &HookOutput) -> i32 {
    if let Some(ref text) = output.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if writeln!(handle, "{}", text).and_then(|_| handle.flush()).is_err() {
            // Fail open when stdout is gone
            return 0;
        }
    }
    if let Some(ref text) = output.stderr {
        eprintln!("{}", text);
    }
    output.exit_code
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    let config = load_config(&args);
    let engine = GuardEngine::new(&config);
    let mut logger = AuditLogger::new(config.audit_path().as_deref());

    let mut raw = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw) {
        eprintln!("branch-guard: failed to read stdin (allowing): {}", e);
        return;
    }

    let options = HookOptions {
        format: args.format,
        dry_run: args.dry_run,
        disabled: config::disabled_by_env(),
    };

    let output = hook::respond(&engine, &raw, options, &mut logger);
    process::exit(emit(&output));
}
