//! Specs: output formats.

use crate::prelude::*;

/// > JSON output lists every candidate with its result
#[test]
fn json_output() {
    let dir = isolated_dir();
    let output = dotstar_in(dir.path())
        .args(["-o", "json", "a*4.+hi", "4uhi", "4hi"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "pattern": "a*4.+hi",
            "results": [
                { "input": "4uhi", "matched": true },
                { "input": "4hi", "matched": false },
            ]
        })
    );
}

/// > --compact prints JSON on a single line
#[test]
fn compact_json() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["-o", "json", "--compact", "a", "a"])
        .assert()
        .success()
        .stdout(concat!(r#"{"pattern":"a","results":[{"input":"a","matched":true}]}"#, "\n"));
}

/// > --explain prints atoms and does not match
#[test]
fn explain_text() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["--explain", "a*4.+hi", "ignored"])
        .assert()
        .success()
        .stdout(predicates::str::contains("0: a*  ZeroOrMore(Literal('a'))"))
        .stdout(predicates::str::contains("min length: 4"))
        .stdout(predicates::str::contains("true").not());
}

/// > --explain with JSON output
#[test]
fn explain_json() {
    let dir = isolated_dir();
    let output = dotstar_in(dir.path())
        .args(["--explain", "-o", "json", ".+x"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["atoms"], serde_json::json!([".+", "x"]));
    assert_eq!(value["min_length"], serde_json::json!(2));
}

/// > --color=always emits ANSI escapes in text mode
#[test]
fn forced_color() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .env_remove("NO_COLOR")
        .args(["--color", "always", "a", "a"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > --no-color wins over --color=always
#[test]
fn no_color_wins() {
    let dir = isolated_dir();
    dotstar_in(dir.path())
        .args(["--color", "always", "--no-color", "a", "a"])
        .assert()
        .success()
        .stdout("true\n");
}
