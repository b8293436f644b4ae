//! Integration tests for branch deletion checks

use branch_guard::{Config, GuardEngine, HookInput, Verdict};

fn engine() -> GuardEngine {
    GuardEngine::new(&Config::default())
}

fn check(tool_name: &str, command: &str) -> Verdict {
    let json = format!(
        r#"{{"tool_name":"{}","tool_input":{{"command":"{}"}}}}"#,
        tool_name,
        command.replace('\\', "\\\\").replace('"', "\\\"")
    );
    let input = HookInput::from_json(&json).unwrap();
    engine().check(&input)
}

fn check_bash(command: &str) -> Verdict {
    check("Bash", command)
}

fn assert_blocked(command: &str, description: &str, branch: &str) {
    let verdict = check_bash(command);
    let reason = verdict
        .reason()
        .unwrap_or_else(|| panic!("expected {command:?} to be blocked"));
    assert!(reason.contains(description), "{reason}");
    assert!(reason.contains(&format!("'{branch}'")), "{reason}");
    assert!(reason.ends_with("Protected branches: main, staging, development"), "{reason}");
}

// ============================================================================
// Local deletion
// ============================================================================

#[test]
fn test_local_delete_protected_blocked() {
    for branch in ["main", "staging", "development"] {
        assert_blocked(&format!("git branch -D {branch}"), "delete local branch", branch);
        assert_blocked(&format!("git branch -d {branch}"), "delete local branch", branch);
        assert_blocked(&format!("git branch --delete {branch}"), "delete local branch", branch);
    }
}

#[test]
fn test_local_delete_unprotected_allowed() {
    assert!(check_bash("git branch -d feature/foo").is_allow());
    assert!(check_bash("git branch -D hotfix-123").is_allow());
}

// ============================================================================
// Remote deletion
// ============================================================================

#[test]
fn test_push_delete_flag_blocked() {
    assert_blocked("git push origin --delete staging", "delete remote branch", "staging");
    assert_blocked("git push upstream  --delete   main", "delete remote branch", "main");
    assert_blocked("git push --delete development", "delete remote branch", "development");
}

#[test]
fn test_push_empty_refspec_blocked() {
    assert_blocked("git push origin :development", "delete remote branch", "development");
    assert_blocked("git push upstream :main", "delete remote branch", "main");
}

#[test]
fn test_remote_delete_unprotected_allowed() {
    assert!(check_bash("git push origin --delete feature/foo").is_allow());
    assert!(check_bash("git push origin :old-branch").is_allow());
}

#[test]
fn test_normal_pushes_allowed() {
    assert!(check_bash("git push origin main").is_allow());
    assert!(check_bash("git push -u origin feature:feature").is_allow());
    assert!(check_bash("git push --force-with-lease origin staging").is_allow());
}

// ============================================================================
// PR merge with branch deletion
// ============================================================================

#[test]
fn test_pr_merge_protected_target_blocked() {
    assert_blocked(
        "gh pr merge main --squash --delete-branch",
        "delete branch via PR merge",
        "main",
    );
}

#[test]
fn test_pr_merge_numeric_target() {
    assert!(check_bash("gh pr merge 42 --delete-branch").is_allow());

    let mut config = Config::default();
    config.branches.protected = vec!["42".to_string()];
    let verdict = GuardEngine::new(&config).evaluate("Bash", "gh pr merge 42 --delete-branch");
    assert!(verdict.is_deny());
    assert!(verdict.reason().unwrap().contains("delete branch via PR merge '42'"));
}

#[test]
fn test_pr_merge_without_delete_allowed() {
    assert!(check_bash("gh pr merge main --squash").is_allow());
}

// ============================================================================
// General properties
// ============================================================================

#[test]
fn test_other_tools_allowed() {
    assert!(check("Read", "git branch -D main").is_allow());
    assert!(check("Write", "git push origin :main").is_allow());
    assert!(check("Read", "").is_allow());
}

#[test]
fn test_missing_command_allowed() {
    let input = HookInput::from_json(r#"{"tool_name":"Bash","tool_input":{}}"#).unwrap();
    assert!(engine().check(&input).is_allow());
}

#[test]
fn test_harmless_commands_allowed() {
    for command in ["ls -la", "git status", "git checkout main", "git branch", "echo main"] {
        assert!(check_bash(command).is_allow(), "{command}");
    }
}

#[test]
fn test_keyword_case_does_not_matter() {
    let lower = check_bash("git branch -d main");
    assert_eq!(check_bash("GIT BRANCH -D main"), lower);
    assert_eq!(check_bash("Git Branch -d main"), lower);
    assert!(check_bash("git PUSH origin --DELETE staging").is_deny());
}

#[test]
fn test_compound_command_later_rule() {
    let verdict = check_bash("git branch -d feature && git push origin :main");
    assert_eq!(verdict.rule_id(), Some("git-push-empty-refspec"));
}

#[test]
fn test_same_input_same_verdict() {
    let engine = engine();
    for command in ["git branch -D main", "git branch -d feature", ""] {
        assert_eq!(engine.evaluate("Bash", command), engine.evaluate("Bash", command));
    }
}
