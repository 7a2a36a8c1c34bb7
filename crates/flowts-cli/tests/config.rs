use super::*;
use clap::Parser;
use tempfile::TempDir;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["flowts", "input.json"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("args should parse")
}

fn config_file(path: &str, source: &str) -> ConfigFile {
    ConfigFile {
        path: PathBuf::from(path),
        config: parse_config(source).expect("config should parse"),
    }
}

#[test]
fn parses_camel_case_keys() {
    let config = parse_config(
        r#"{
          "stripFlowPragma": false,
          "denyWarnings": true,
          "prettyOutput": true,
          "outDir": "dist",
          "diagnosticsFormat": "json"
        }"#,
    )
    .unwrap();
    assert_eq!(config.strip_flow_pragma, Some(false));
    assert_eq!(config.deny_warnings, Some(true));
    assert_eq!(config.pretty_output, Some(true));
    assert_eq!(config.out_dir, Some(PathBuf::from("dist")));
    assert_eq!(config.diagnostics_format, Some(DiagnosticsFormat::Json));
}

#[test]
fn booleans_accept_strings() {
    let config = parse_config(r#"{ "stripFlowPragma": "off", "denyWarnings": "TRUE" }"#).unwrap();
    assert_eq!(config.strip_flow_pragma, Some(false));
    assert_eq!(config.deny_warnings, Some(true));
    assert_eq!(config.pretty_output, None);
}

#[test]
fn invalid_boolean_string_is_an_error() {
    let err = parse_config(r#"{ "denyWarnings": "sometimes" }"#).unwrap_err();
    assert!(format!("{err:#}").contains("invalid boolean value: 'sometimes'"));
}

#[test]
fn defaults_without_config() {
    let options = resolve_options(&args(&[]), None, Path::new("/work"));
    assert!(options.convert.strip_flow_pragma);
    assert!(!options.deny_warnings);
    assert!(!options.pretty);
    assert_eq!(options.out_dir, None);
    assert_eq!(options.diagnostics_format, DiagnosticsFormat::Text);
}

#[test]
fn config_supplies_defaults() {
    let config = config_file(
        "/project/flowts.json",
        r#"{ "stripFlowPragma": false, "prettyOutput": true, "outDir": "build/ts", "diagnosticsFormat": "json" }"#,
    );
    let options = resolve_options(&args(&[]), Some(&config), Path::new("/work"));
    assert!(!options.convert.strip_flow_pragma);
    assert!(options.pretty);
    assert_eq!(options.out_dir, Some(PathBuf::from("/project/build/ts")));
    assert_eq!(options.diagnostics_format, DiagnosticsFormat::Json);
}

#[test]
fn command_line_overrides_config() {
    let config = config_file(
        "/project/flowts.json",
        r#"{ "stripFlowPragma": true, "outDir": "build", "diagnosticsFormat": "json" }"#,
    );
    let options = resolve_options(
        &args(&[
            "--no-strip-pragma",
            "--out-dir",
            "out",
            "--diagnostics-format",
            "text",
            "--deny-warnings",
        ]),
        Some(&config),
        Path::new("/work"),
    );
    assert!(!options.convert.strip_flow_pragma);
    assert_eq!(options.out_dir, Some(PathBuf::from("/work/out")));
    assert_eq!(options.diagnostics_format, DiagnosticsFormat::Text);
    assert!(options.deny_warnings);
}

#[test]
fn finds_config_in_working_directory() {
    let dir = TempDir::new().unwrap();
    assert!(find_config(None, dir.path()).unwrap().is_none());

    std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "denyWarnings": true }"#).unwrap();
    let found = find_config(None, dir.path()).unwrap().expect("config should be found");
    assert_eq!(found.config.deny_warnings, Some(true));
    assert_eq!(found.base_dir(), dir.path());
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let err = find_config(Some(Path::new("missing.json")), dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn explicit_config_is_relative_to_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("configs")).unwrap();
    std::fs::write(
        dir.path().join("configs/custom.json"),
        r#"{ "outDir": "../generated" }"#,
    )
    .unwrap();

    let found = find_config(Some(Path::new("configs/custom.json")), dir.path())
        .unwrap()
        .unwrap();
    let options = resolve_options(&args(&[]), Some(&found), dir.path());
    assert_eq!(
        options.out_dir,
        Some(dir.path().join("configs").join("../generated"))
    );
}
