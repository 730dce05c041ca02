//! Specs: matching candidates against a pattern.

use crate::prelude::*;

/// > One true/false line per candidate, in order
#[test]
fn reference_pattern_candidates() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["a*4.+hi", "aaaaaa4uhi", "4uhi", "meow", "4hi"])
        .assert()
        .success()
        .stdout("true\ntrue\nfalse\nfalse\n");
}

/// > Non-matching candidates never change the exit code
#[test]
fn all_rejected_still_exits_zero() {
    let dir = isolated_dir();
    dotstar_in(dir.path()).args(["a+", "b", "c"]).assert().success().stdout("false\nfalse\n");
}

/// > `.` does not accept the empty string; `.*` does
#[test]
fn empty_candidate() {
    let dir = isolated_dir();
    dotstar_in(dir.path()).args([".", ""]).assert().success().stdout("false\n");
    dotstar_in(dir.path()).args([".*", ""]).assert().success().stdout("true\n");
}

/// > Candidates are read from stdin when none are given
#[test]
fn candidates_from_stdin() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .arg("a+")
        .write_stdin("aaa\n\r\nab\r\n")
        .assert()
        .success()
        .stdout("true\nfalse\nfalse\n");
}

/// > Empty stdin produces no output
#[test]
fn empty_stdin() {
    let dir = isolated_dir();
    dotstar_in(dir.path()).arg("a").write_stdin("").assert().success().stdout("");
}

/// > Candidates starting with '-' can follow `--`
#[test]
fn hyphen_candidates_after_separator() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["--", "-+", "---", "-x"])
        .assert()
        .success()
        .stdout("true\nfalse\n");
}

/// > Verbose mode writes search details to stderr only
#[test]
fn verbose_goes_to_stderr() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["--verbose", "a*b", "aab"])
        .assert()
        .success()
        .stdout("true\n")
        .stderr(predicates::str::contains("Pattern:").and(predicates::str::contains("a*")));
}

/// > DOTSTAR_DEBUG enables verbose mode
#[test]
fn debug_env_enables_verbose() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .env("DOTSTAR_DEBUG", "1")
        .args(["abc", "ab"])
        .assert()
        .success()
        .stderr(predicates::str::contains("rejected on length"));
}

/// > Without verbose mode, stderr stays empty
#[test]
fn quiet_by_default() {
    let dir = isolated_dir();
    dotstar_in(dir.path()).args(["abc", "abc"]).assert().success().stderr("");
}
