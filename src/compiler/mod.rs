//! Driving the pipeline: from a `.lr` file on disk to a native executable.
//!
//! The heavy lifting happens in the preprocessor, lexer, parser and code
//! generator; this module wires them together, hands the emitted C++ to
//! the host toolchain and cleans up afterwards.
use std::{
    error::Error,
    ffi::OsStr,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, info};

use crate::{codegen::Codegen, lexer::Lexer, parser, preprocessor::preprocess};

/// A problem with how the compiler was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for UsageError {}

/// The host C++ compiler rejected the generated translation unit. Its
/// stderr is carried along verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub file: String,
    pub stderr: String,
}

impl Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "C++ backend failed for {file}:\n{stderr}",
            file = self.file,
            stderr = self.stderr
        ))
    }
}

impl Error for BackendError {}

pub struct Compiler {
    source_path: PathBuf,
}

impl Compiler {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }

    /// Run the full pipeline. On success the produced executable sits next
    /// to the input file (named after its stem) and the intermediate `.cpp`
    /// has been removed; the returned path points at the executable.
    pub fn compile(&self) -> Result<PathBuf, Box<dyn Error>> {
        if self.source_path.extension().and_then(OsStr::to_str) != Some("lr") {
            return Err(Box::new(UsageError(
                "Input file must have .lr extension".into(),
            )));
        }

        if !self.source_path.exists() {
            return Err(Box::new(UsageError(format!(
                "File '{}' not found",
                self.source_path.display()
            ))));
        }

        // Incorporations resolve relative to the input file, wherever the
        // compiler itself was started from.
        let absolute_path = fs::canonicalize(&self.source_path)?;
        let base_dir = absolute_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let source = fs::read_to_string(&absolute_path)?;
        let source = preprocess(&source, &base_dir)?;

        let tokens = Lexer::new(&source).lex()?;
        let program = parser::parse(&mut tokens.into())?;
        let cpp = Codegen::new().generate(&program);

        let cpp_path = self.source_path.with_extension("cpp");
        let output_path = self.source_path.with_extension("");

        debug!("writing '{}'", cpp_path.display());
        fs::write(&cpp_path, cpp)?;

        self.invoke_backend(&cpp_path, &output_path)?;

        fs::remove_file(&cpp_path)?;

        Ok(output_path)
    }

    fn invoke_backend(&self, cpp_path: &Path, output_path: &Path) -> Result<(), Box<dyn Error>> {
        info!("Compiling '{}'...", cpp_path.display());

        let output = Command::new("g++")
            .arg(cpp_path)
            .arg("-o")
            .arg(output_path)
            .output()?;

        if !output.status.success() {
            return Err(Box::new(BackendError {
                file: self.source_path.display().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_extension_is_a_usage_error() {
        let error = Compiler::new("program.txt")
            .compile()
            .expect_err("should not compile");

        assert_eq!("Input file must have .lr extension", error.to_string());
    }

    #[test]
    fn test_missing_extension_is_a_usage_error() {
        let error = Compiler::new("program")
            .compile()
            .expect_err("should not compile");

        assert_eq!("Input file must have .lr extension", error.to_string());
    }

    #[test]
    fn test_missing_file_is_a_usage_error() {
        let error = Compiler::new("no_such_file.lr")
            .compile()
            .expect_err("should not compile");

        assert_eq!("File 'no_such_file.lr' not found", error.to_string());
    }
}
