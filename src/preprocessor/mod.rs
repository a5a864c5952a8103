//! Textual expansion of `incorporate` directives.
//!
//! Runs before the lexer ever sees the source. Each directive line is
//! replaced by the (recursively preprocessed) content of the named file.
//! There is no cycle detection; a cycle of incorporations expands until
//! the process runs out of patience.
use std::{
    env,
    error::Error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessError {
    pub message: String,
}

impl Display for PreprocessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for PreprocessError {}

pub type PreprocessResult<T> = Result<T, PreprocessError>;

/// Expand every `incorporate "file"` line in `source`. Paths resolve
/// against `base_dir` (the directory of the file being processed) first
/// and the working directory second; the first existing candidate wins.
pub fn preprocess(source: &str, base_dir: &Path) -> PreprocessResult<String> {
    let mut processed_lines = vec![];

    for line in source.lines() {
        let Some(argument) = incorporate_argument(line) else {
            processed_lines.push(line.to_string());
            continue;
        };

        let candidates = [base_dir.join(&argument), PathBuf::from(&argument)];

        let Some(found) = candidates.iter().find(|candidate| candidate.exists()) else {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            return Err(PreprocessError {
                message: format!(
                    "Could not find included file: '{argument}' (searched in '{}' and '{}')",
                    base_dir.display(),
                    cwd.display()
                ),
            });
        };

        debug!("incorporating '{}'", found.display());

        let content = fs::read_to_string(found).map_err(|e| PreprocessError {
            message: format!("Could not read included file '{}': {e}", found.display()),
        })?;

        // The included file resolves its own incorporations relative to
        // its own directory.
        let new_base = found.parent().unwrap_or(Path::new("."));
        processed_lines.push(preprocess(&content, new_base)?);
    }

    Ok(processed_lines.join("\n"))
}

/// If `line` is an `incorporate` directive, return its quoted argument.
/// Directives with no quoted argument are malformed and pass through to
/// the lexer untouched.
fn incorporate_argument(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix("incorporate")?;

    // `incorporated` and friends are identifiers, not directives
    if rest
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
    {
        return None;
    }

    let mut parts = rest.split('"');
    parts.next()?;
    Some(parts.next()?.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_plain_source_passes_through() {
        let source = "datum x: whole = 5;\nreveal(x);";

        assert_eq!(
            Ok(source.to_string()),
            preprocess(source, Path::new("."))
        );
    }

    #[test]
    fn test_incorporate_replaces_line() {
        let dir = tempdir().expect("should create tempdir");
        fs::write(dir.path().join("lib.inc"), "algorithm helper() begin end")
            .expect("should write include");

        let expanded = preprocess(
            "incorporate \"lib.inc\"\nreveal(1);",
            dir.path(),
        )
        .expect("should preprocess");

        assert_eq!("algorithm helper() begin end\nreveal(1);", expanded);
    }

    #[test]
    fn test_nested_incorporate_resolves_relative_to_including_file() {
        let dir = tempdir().expect("should create tempdir");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("should create subdir");
        fs::write(nested.join("outer.inc"), "incorporate \"inner.inc\"")
            .expect("should write include");
        fs::write(nested.join("inner.inc"), "datum depth: whole = 2;")
            .expect("should write include");

        let expanded = preprocess("incorporate \"nested/outer.inc\"", dir.path())
            .expect("should preprocess");

        assert_eq!("datum depth: whole = 2;", expanded);
    }

    #[test]
    fn test_missing_include_names_both_locations() {
        let dir = tempdir().expect("should create tempdir");

        let error = preprocess("incorporate \"gone.inc\"", dir.path())
            .expect_err("should not preprocess");

        assert!(error.message.contains("Could not find included file: 'gone.inc'"));
        assert!(error
            .message
            .contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_malformed_directive_passes_through() {
        let source = "incorporate lib.inc";

        assert_eq!(
            Ok(source.to_string()),
            preprocess(source, Path::new("."))
        );
    }

    #[test]
    fn test_longer_identifier_is_no_directive() {
        let source = "incorporated = 1;";

        assert_eq!(
            Ok(source.to_string()),
            preprocess(source, Path::new("."))
        );
    }

    #[test]
    fn test_directive_must_lead_the_line() {
        let source = "datum x: whole; incorporate \"lib.inc\"";

        assert_eq!(
            Ok(source.to_string()),
            preprocess(source, Path::new("/nowhere"))
        );
    }
}
