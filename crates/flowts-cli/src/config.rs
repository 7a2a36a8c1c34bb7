//! `flowts.json` configuration.
//!
//! The config file supplies defaults for the command-line options; flags
//! given on the command line always win. Relative paths in the file are
//! resolved against the directory that contains it.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use flowts_convert::ConvertOptions;

use crate::args::{CliArgs, DiagnosticsFormat};

pub const CONFIG_FILE_NAME: &str = "flowts.json";

/// Custom deserializer for boolean options that accepts both bool and string values.
/// This handles configs that contain `"prettyOutput": "true"` instead of `"prettyOutput": true`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlowtsConfig {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strip_flow_pragma: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub deny_warnings: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub pretty_output: Option<bool>,
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub diagnostics_format: Option<DiagnosticsFormat>,
}

/// A config file and where it was read from.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub config: FlowtsConfig,
}

impl ConfigFile {
    /// Directory that relative paths in the file are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Options after merging the command line, the config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub convert: ConvertOptions,
    pub out_dir: Option<PathBuf>,
    pub deny_warnings: bool,
    pub pretty: bool,
    pub diagnostics_format: DiagnosticsFormat,
}

pub fn parse_config(source: &str) -> Result<FlowtsConfig> {
    serde_json::from_str(source).context("failed to parse flowts config")
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config =
        parse_config(&source).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(ConfigFile {
        path: path.to_path_buf(),
        config,
    })
}

/// Load the config named with `--config`, or `flowts.json` from `cwd` if
/// one exists.
///
/// An explicitly named file must exist; the implicit one is optional.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        return load_config(&cwd.join(path)).map(Some);
    }
    let implicit = cwd.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        tracing::debug!(path = %implicit.display(), "using config");
        return load_config(&implicit).map(Some);
    }
    Ok(None)
}

pub fn resolve_options(args: &CliArgs, config: Option<&ConfigFile>, cwd: &Path) -> ResolvedOptions {
    let defaults = FlowtsConfig::default();
    let file = config.map_or(&defaults, |config| &config.config);

    let strip_flow_pragma = !args.no_strip_pragma
        && file
            .strip_flow_pragma
            .unwrap_or(ConvertOptions::default().strip_flow_pragma);

    let out_dir = match (&args.out_dir, config) {
        (Some(dir), _) => Some(cwd.join(dir)),
        (None, Some(config)) => config
            .config
            .out_dir
            .as_ref()
            .map(|dir| config.base_dir().join(dir)),
        (None, None) => None,
    };

    ResolvedOptions {
        convert: ConvertOptions { strip_flow_pragma },
        out_dir,
        deny_warnings: args.deny_warnings || file.deny_warnings.unwrap_or(false),
        pretty: args.pretty || file.pretty_output.unwrap_or(false),
        diagnostics_format: args
            .diagnostics_format
            .or(file.diagnostics_format)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
