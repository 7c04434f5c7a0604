//! End-to-end tests driving the stitch binary over its process boundary:
//! one JSON request on stdin, the updated document on stdout, diagnostics
//! on stderr.

use assert_cmd::Command;
use predicates::prelude::*;

fn stitch() -> Command {
    Command::cargo_bin("stitch").unwrap()
}

fn request(content: &str, find: &str, replace: &str, replace_all: bool) -> String {
    serde_json::json!({
        "content": content,
        "oldString": find,
        "newString": replace,
        "replaceAll": replace_all,
    })
    .to_string()
}

#[test]
fn exact_edit_round_trips_through_the_pipe() {
    let content = "function hello() {\n  console.log(\"world\");\n}";
    stitch()
        .write_stdin(request(
            content,
            "console.log(\"world\");",
            "console.log(\"universe\");",
            false,
        ))
        .assert()
        .success()
        .stdout("function hello() {\n  console.log(\"universe\");\n}");
}

#[test]
fn stdout_is_byte_exact_with_no_added_trailing_newline() {
    stitch()
        .write_stdin(request("alpha\n", "alpha", "beta", false))
        .assert()
        .success()
        .stdout("beta\n");

    stitch()
        .write_stdin(request("alpha", "alpha", "beta", false))
        .assert()
        .success()
        .stdout("beta");
}

#[test]
fn line_trimmed_edit_succeeds() {
    stitch()
        .write_stdin(request(
            "  if (true) {\n    return false;\n  }",
            "if (true) {\nreturn false;\n}",
            "if (false) {\nreturn true;\n}",
            false,
        ))
        .assert()
        .success()
        .stdout("if (false) {\nreturn true;\n}");
}

#[test]
fn whitespace_normalized_edit_succeeds() {
    stitch()
        .write_stdin(request(
            "const   x    =     5;",
            "const x = 5;",
            "const x = 10;",
            false,
        ))
        .assert()
        .success()
        .stdout("const x = 10;");
}

#[test]
fn escaped_fragment_matches_literal_content() {
    stitch()
        .write_stdin(request(
            "console.log(\"Hello\nWorld\");",
            "console.log(\"Hello\\nWorld\");",
            "console.log(\"Hello\nUniverse\");",
            false,
        ))
        .assert()
        .success()
        .stdout("console.log(\"Hello\nUniverse\");");
}

#[test]
fn replace_all_edits_every_occurrence() {
    let content = "console.log(\"test\");\nconsole.log(\"test\");\nconsole.log(\"test\");";
    stitch()
        .write_stdin(request(
            content,
            "console.log(\"test\");",
            "console.log(\"updated\");",
            true,
        ))
        .assert()
        .success()
        .stdout(
            "console.log(\"updated\");\nconsole.log(\"updated\");\nconsole.log(\"updated\");",
        );
}

#[test]
fn ambiguous_match_fails_without_touching_stdout() {
    let content = "console.log(\"test\");\nconsole.log(\"test\");";
    stitch()
        .write_stdin(request(
            content,
            "console.log(\"test\");",
            "console.log(\"updated\");",
            false,
        ))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("2 locations"))
        .stderr(predicate::str::contains("replaceAll"));
}

#[test]
fn missing_fragment_fails_with_diagnostic() {
    stitch()
        .write_stdin(request(
            "console.log(\"hello\");",
            "nonexistent string",
            "updated",
            false,
        ))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("nonexistent string"));
}

#[test]
fn identical_fragments_fail() {
    stitch()
        .write_stdin(request("", "", "", false))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("identical"));
}

#[test]
fn empty_find_inserts_into_empty_document() {
    stitch()
        .write_stdin(request("", "", "new content", false))
        .assert()
        .success()
        .stdout("new content");
}

#[test]
fn unicode_content_survives_the_round_trip() {
    stitch()
        .write_stdin(request(
            "const message = \"Hello 世界! 🌍\";",
            "Hello 世界! 🌍",
            "Hello World! 🌎",
            false,
        ))
        .assert()
        .success()
        .stdout("const message = \"Hello World! 🌎\";");
}

#[test]
fn malformed_request_fails() {
    stitch()
        .write_stdin("{not json}")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn replace_all_flag_may_be_omitted() {
    stitch()
        .write_stdin(r#"{"content":"one fish","oldString":"fish","newString":"bird"}"#)
        .assert()
        .success()
        .stdout("one bird");
}
