use super::*;
use crate::driver::FileOutcome;
use flowts_common::{Limitation, SourceLocation};
use std::path::PathBuf;

fn exact_object_warning() -> Diagnostic {
    Diagnostic::new(
        Limitation::ExactObject,
        Some(&SourceLocation::on_line(3, 9, 20)),
    )
}

fn sample_result() -> RunResult {
    RunResult {
        files: vec![
            FileOutcome {
                path: PathBuf::from("src/a.json"),
                output: Some(PathBuf::from("src/a.ts.json")),
                warnings: vec![exact_object_warning()],
                error: None,
            },
            FileOutcome {
                path: PathBuf::from("src/b.json"),
                output: None,
                warnings: Vec::new(),
                error: Some("failed to translate src/b.json: support for 'DeclareClass' is not implemented yet (at line 1, column 1)".to_string()),
            },
        ],
    }
}

#[test]
fn formats_warning_like_the_reference_tool() {
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_warning(Path::new("src/a.json"), &exact_object_warning()),
        "Warning: Exact types can't be expressed in TypeScript (at src/a.json: line 3, column 10). \
         See https://github.com/Microsoft/TypeScript/issues/12936"
    );
}

#[test]
fn formats_error_with_file() {
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_error(Path::new("x.json"), "boom"),
        "Error: boom (in x.json)"
    );
}

#[test]
fn render_lists_warnings_errors_and_summary() {
    let output = Reporter::new(false).render(&sample_result());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Warning: Exact types"));
    assert!(lines[1].starts_with("Error: failed to translate src/b.json"));
    assert_eq!(lines[2], "Translated 1 of 2 file(s) with 1 warning(s)");
}

#[test]
fn json_report_lists_outcomes() {
    let json = Reporter::new(false).render_json(&sample_result()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["output"], "src/a.ts.json");
    assert_eq!(files[0]["warnings"][0]["limitation"], "exact-object");
    assert_eq!(files[0]["warnings"][0]["line"], 3);
    assert_eq!(files[0]["warnings"][0]["column"], 10);
    assert!(files[0].get("error").is_none());
    assert!(files[1]["error"].as_str().unwrap().contains("DeclareClass"));
    assert!(files[1].get("output").is_none());
}
