use super::*;
use flowts_common::Limitation;
use tempfile::TempDir;

/// `// @flow` then `export type Id = {| id: ?string |};`
const EXACT_ALIAS: &str = r#"{
  "type": "File",
  "program": {
    "type": "Program",
    "sourceType": "module",
    "body": [
      {
        "type": "ExportNamedDeclaration",
        "exportKind": "type",
        "specifiers": [],
        "source": null,
        "leadingComments": [
          { "type": "CommentLine", "value": " @flow", "start": 0, "end": 8 }
        ],
        "declaration": {
          "type": "TypeAlias",
          "id": { "type": "Identifier", "name": "Id" },
          "right": {
            "type": "ObjectTypeAnnotation",
            "loc": { "start": { "line": 2, "column": 17 }, "end": { "line": 2, "column": 35 } },
            "exact": true,
            "properties": [
              {
                "type": "ObjectTypeProperty",
                "key": { "type": "Identifier", "name": "id" },
                "value": {
                  "type": "NullableTypeAnnotation",
                  "typeAnnotation": { "type": "StringTypeAnnotation" }
                }
              }
            ]
          }
        }
      }
    ]
  },
  "comments": [
    { "type": "CommentLine", "value": " @flow", "start": 0, "end": 8 }
  ]
}"#;

const PLAIN_ALIAS: &str = r#"{
  "type": "Program",
  "body": [
    {
      "type": "TypeAlias",
      "id": { "type": "Identifier", "name": "Name" },
      "right": { "type": "StringTypeAnnotation" }
    }
  ]
}"#;

const DECLARE_CLASS: &str = r#"{
  "type": "Program",
  "body": [
    {
      "type": "DeclareClass",
      "loc": { "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 20 } },
      "id": { "type": "Identifier", "name": "Widget" }
    }
  ]
}"#;

fn write(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

fn options(out_dir: Option<PathBuf>) -> ResolvedOptions {
    ResolvedOptions {
        convert: ConvertOptions::default(),
        out_dir,
        deny_warnings: false,
        pretty: false,
        diagnostics_format: crate::args::DiagnosticsFormat::Text,
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn collects_json_files_recursively() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a.json", PLAIN_ALIAS);
    write(dir.path(), "src/nested/b.json", PLAIN_ALIAS);
    write(dir.path(), "src/a.ts.json", PLAIN_ALIAS);
    write(dir.path(), "src/flowts.json", "{}");
    write(dir.path(), "src/readme.md", "");

    let inputs = collect_inputs(&[PathBuf::from("src")], dir.path()).unwrap();
    let relative: Vec<&Path> = inputs.iter().map(|input| input.relative.as_path()).collect();
    assert_eq!(
        relative,
        vec![Path::new("a.json"), Path::new("nested/b.json")]
    );
}

#[test]
fn named_files_are_taken_once() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "one.json", PLAIN_ALIAS);

    let inputs = collect_inputs(
        &[PathBuf::from("one.json"), PathBuf::from("one.json")],
        dir.path(),
    )
    .unwrap();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].relative, PathBuf::from("one.json"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = collect_inputs(&[PathBuf::from("nope.json")], dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("input not found"));
}

#[test]
fn output_paths() {
    let input = InputFile {
        path: PathBuf::from("/p/src/nested/b.json"),
        relative: PathBuf::from("nested/b.json"),
    };
    assert_eq!(
        output_path(&input, None),
        PathBuf::from("/p/src/nested/b.ts.json")
    );
    assert_eq!(
        output_path(&input, Some(Path::new("/out"))),
        PathBuf::from("/out/nested/b.ts.json")
    );
}

// =============================================================================
// Translation
// =============================================================================

#[test]
fn translates_and_writes_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "types.json", EXACT_ALIAS);

    let result = run(&[input], &options(None), dir.path()).unwrap();

    assert_eq!(result.files.len(), 1);
    let outcome = &result.files[0];
    assert!(!outcome.failed());
    let output = dir.path().join("types.ts.json");
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));

    let limitations: Vec<Limitation> = outcome.warnings.iter().map(|w| w.limitation).collect();
    assert_eq!(limitations, vec![Limitation::ExactObject]);
    assert_eq!(outcome.warnings[0].line, 2);
    assert_eq!(outcome.warnings[0].column, 18);

    let ast = read_json(&output);
    let statement = &ast["program"]["body"][0];
    assert_eq!(statement["exportKind"], "value");
    assert_eq!(statement["declaration"]["type"], "TSTypeAliasDeclaration");
    assert_eq!(
        statement["declaration"]["typeAnnotation"]["members"][0]["typeAnnotation"]["typeAnnotation"]["type"],
        "TSUnionType"
    );
    assert!(statement.get("leadingComments").is_none());
    assert_eq!(ast["comments"].as_array().map(Vec::len), Some(0));
}

#[test]
fn pragma_is_kept_when_disabled() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "types.json", EXACT_ALIAS);
    let mut options = options(None);
    options.convert.strip_flow_pragma = false;

    run(&[input], &options, dir.path()).unwrap();

    let ast = read_json(&dir.path().join("types.ts.json"));
    assert_eq!(
        ast["program"]["body"][0]["leadingComments"][0]["value"],
        " @flow"
    );
}

#[test]
fn out_dir_mirrors_directory_layout() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a.json", PLAIN_ALIAS);
    write(dir.path(), "src/nested/b.json", PLAIN_ALIAS);
    let out = dir.path().join("out");

    let result = run(&[PathBuf::from("src")], &options(Some(out.clone())), dir.path()).unwrap();

    assert_eq!(result.failed_count(), 0);
    assert!(out.join("a.ts.json").is_file());
    assert!(out.join("nested/b.ts.json").is_file());
    assert_eq!(
        read_json(&out.join("a.ts.json"))["body"][0]["type"],
        "TSTypeAliasDeclaration"
    );
}

#[test]
fn one_failing_file_does_not_stop_the_others() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "in/bad.json", DECLARE_CLASS);
    write(dir.path(), "in/broken.json", "{ not json");
    write(dir.path(), "in/good.json", PLAIN_ALIAS);

    let result = run(&[PathBuf::from("in")], &options(None), dir.path()).unwrap();

    assert_eq!(result.files.len(), 3);
    assert_eq!(result.failed_count(), 2);
    let bad = &result.files[0];
    assert!(bad.error.as_deref().unwrap().contains("support for 'DeclareClass' is not implemented yet"));
    assert!(!dir.path().join("in/bad.ts.json").exists());
    let broken = &result.files[1];
    assert!(broken.error.as_deref().unwrap().contains("failed to parse AST JSON"));
    assert!(dir.path().join("in/good.ts.json").is_file());
    assert_eq!(result.exit_code(false), EXIT_FAILED);
}

#[test]
fn exit_codes() {
    let dir = TempDir::new().unwrap();
    let exact = write(dir.path(), "exact.json", EXACT_ALIAS);
    let plain = write(dir.path(), "plain.json", PLAIN_ALIAS);

    let clean = run(&[plain], &options(None), dir.path()).unwrap();
    assert_eq!(clean.exit_code(true), EXIT_SUCCESS);

    let lossy = run(&[exact], &options(None), dir.path()).unwrap();
    assert_eq!(lossy.warning_count(), 1);
    assert_eq!(lossy.exit_code(false), EXIT_SUCCESS);
    assert_eq!(lossy.exit_code(true), EXIT_WARNINGS_DENIED);
}
