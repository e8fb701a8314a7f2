use assert_cmd::Command;
use predicates::prelude::*;

fn tomate() -> Command {
    Command::cargo_bin("tomate").unwrap()
}

#[test]
fn test_matching_line_exits_zero() {
    tomate()
        .args(["-E", "%d+"])
        .write_stdin("abc\nx42y\n")
        .assert()
        .success()
        .stdout("x42y\n");
}

#[test]
fn test_no_match_exits_one() {
    tomate()
        .args(["-E", "%d+"])
        .write_stdin("abc\n")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_only_matching_prints_match() {
    tomate()
        .args(["-o", "-E", "%a-%d"])
        .write_stdin("--abc123\n")
        .assert()
        .success()
        .stdout("abc1\n");
}

#[test]
fn test_only_matching_keeps_whole_characters() {
    tomate()
        .args(["-o", "-E", "é+"])
        .write_stdin("caféé!\n")
        .assert()
        .success()
        .stdout("éé\n");
}

#[test]
fn test_strict_rejects_unterminated_set() {
    tomate()
        .args(["--strict", "-E", "[ab"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unterminated set"));
}

#[test]
fn test_lenient_accepts_unterminated_set() {
    tomate()
        .args(["-E", "[ab"])
        .write_stdin("xb\n")
        .assert()
        .success()
        .stdout("xb\n");
}

#[test]
fn test_dump_lists_items() {
    tomate()
        .args(["--dump", "-E", "%d+x"])
        .assert()
        .success()
        .stdout("Digit+\nLiteral('x')\n");
}

#[test]
fn test_missing_pattern_is_usage_error() {
    tomate()
        .arg("-o")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected '-E <pattern>'"));
}
