//! Input discovery and the per-file translate-and-write loop.
//!
//! Files are independent: each one is read, translated and written on its
//! own rayon worker, and a failure in one file never stops the others.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use flowts_common::Diagnostic;
use flowts_convert::{Conversion, ConvertOptions, convert_program};

use crate::config::ResolvedOptions;

/// Suffix of translated files, also used to skip them during discovery.
pub const OUTPUT_SUFFIX: &str = ".ts.json";

/// Exit status codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_WARNINGS_DENIED: i32 = 2;

/// One file to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    /// Path below the directory it was found in, or the file name for
    /// inputs named directly
    pub relative: PathBuf,
}

/// What happened to one input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub warnings: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    pub files: Vec<FileOutcome>,
}

impl RunResult {
    pub fn warning_count(&self) -> usize {
        self.files.iter().map(|file| file.warnings.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.failed()).count()
    }

    /// 1 when any file failed, 2 when warnings are denied and there were
    /// some, else 0.
    pub fn exit_code(&self, deny_warnings: bool) -> i32 {
        if self.failed_count() > 0 {
            EXIT_FAILED
        } else if deny_warnings && self.warning_count() > 0 {
            EXIT_WARNINGS_DENIED
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Expand the command-line paths into the files to translate.
///
/// Directories are searched recursively for `*.json`, skipping earlier
/// output (`*.ts.json`) and `flowts.json`. Files named directly are taken
/// as they are. The result is sorted and free of duplicates.
pub fn collect_inputs(paths: &[PathBuf], cwd: &Path) -> Result<Vec<InputFile>> {
    let mut files = Vec::new();
    for path in paths {
        let path = cwd.join(path);
        if path.is_dir() {
            for entry in WalkDir::new(&path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let found = entry.path();
                if entry.file_type().is_dir() || !is_input_file(found) {
                    continue;
                }
                let relative = found.strip_prefix(&path).unwrap_or(found).to_path_buf();
                files.push(InputFile {
                    path: found.to_path_buf(),
                    relative,
                });
            }
        } else if path.is_file() {
            let relative = path
                .file_name()
                .map_or_else(|| path.clone(), PathBuf::from);
            files.push(InputFile { path, relative });
        } else {
            bail!("input not found: {}", path.display());
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);
    Ok(files)
}

fn is_input_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".json") && !name.ends_with(OUTPUT_SUFFIX) && name != crate::config::CONFIG_FILE_NAME
}

/// Where the translation of `input` is written: `<stem>.ts.json`, next to
/// the input or at the same relative path below `out_dir`.
pub fn output_path(input: &InputFile, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{OUTPUT_SUFFIX}");
    match out_dir {
        Some(dir) => dir.join(&input.relative).with_file_name(file_name),
        None => input.path.with_file_name(file_name),
    }
}

/// Read and translate one Babel AST JSON file.
pub fn translate_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let program = flowts_ast::from_json_str(&source)
        .with_context(|| format!("failed to parse AST JSON in {}", path.display()))?;
    let conversion = convert_program(program, options)
        .with_context(|| format!("failed to translate {}", path.display()))?;
    Ok(conversion)
}

fn process_file(input: &InputFile, options: &ResolvedOptions) -> Result<(PathBuf, Vec<Diagnostic>)> {
    let conversion = translate_file(&input.path, &options.convert)?;
    let output = output_path(input, options.out_dir.as_deref());
    let json = flowts_ast::to_json_string(&conversion.ast, options.pretty)
        .with_context(|| format!("failed to serialize {}", output.display()))?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok((output, conversion.warnings))
}

/// Translate every input, in parallel, and write the results.
pub fn run(paths: &[PathBuf], options: &ResolvedOptions, cwd: &Path) -> Result<RunResult> {
    let inputs = collect_inputs(paths, cwd)?;
    tracing::info!(files = inputs.len(), "translating");

    let files = inputs
        .par_iter()
        .map(|input| match process_file(input, options) {
            Ok((output, warnings)) => FileOutcome {
                path: input.path.clone(),
                output: Some(output),
                warnings,
                error: None,
            },
            Err(err) => {
                tracing::debug!(path = %input.path.display(), "translation failed");
                FileOutcome {
                    path: input.path.clone(),
                    output: None,
                    warnings: Vec::new(),
                    error: Some(format!("{err:#}")),
                }
            }
        })
        .collect();
    Ok(RunResult { files })
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
