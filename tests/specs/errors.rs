//! Specs: compile errors and resource limits.

use crate::prelude::*;

/// > Leading quantifier is a pattern error with exit code 2
#[test]
fn leading_quantifier_rejected() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["*a", "a"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains(
            "error: invalid pattern: quantifier '*' at position 0 has no preceding atom",
        ));
}

/// > Consecutive quantifiers are a pattern error
#[test]
fn double_quantifier_rejected() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["a*+", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("quantifier '+' at position 2"));
}

/// > Non-ASCII pattern characters are rejected
#[test]
fn non_ascii_rejected() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["caf\u{e9}", "cafe"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported character"));
}

/// > Candidates over the state limit report `error` and exit 3
#[test]
fn state_limit_exceeded() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["--max-states", "10", "a*b", "b", "aaaaab"])
        .assert()
        .code(3)
        .stdout("true\nerror\n")
        .stderr(predicates::str::contains("exceeding the limit of 10"));
}

/// > --no-limit lifts the state limit
#[test]
fn no_limit_flag() {
    let dir = project_with_config("version = 1\n[limits]\nmax_states = 2\n");
    dotstar_in(dir.path())
        .args(["--no-limit", "a*b", "aaaaab"])
        .assert()
        .success()
        .stdout("true\n");
}

/// > --max-states 0 means unlimited, like `max_states = 0` in config
#[test]
fn zero_max_states_flag_is_unlimited() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["--max-states", "0", "a*b", "aaaab"])
        .assert()
        .success()
        .stdout("true\n")
        .stderr("");
}

/// > Zero in config and on the command line behave the same
#[test]
fn zero_max_states_config_is_unlimited() {
    let dir = project_with_config("version = 1\n[limits]\nmax_states = 0\n");
    dotstar_in(dir.path()).args(["a*b", "aaaab"]).assert().success().stdout("true\n");
}
