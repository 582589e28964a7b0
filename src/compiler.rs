//! External compiler invocation.
//!
//! The rendered document is optionally handed to a LaTeX compiler
//! (`pdflatex` by default) running as a subprocess with inherited
//! stdout/stderr. The compiler is an optional collaborator: when its binary
//! is not resolvable on the search path, compilation is skipped with a
//! notice instead of failing, and the rendered source stays on disk either
//! way.

use crate::error::{ResumakeError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of a compile attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    /// The compiler ran and exited successfully.
    Compiled,
    /// No compiler is configured, or the binary is not on the search path.
    Skipped,
}

/// What a search-path probe found for the configured compiler command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilerProbe {
    /// The command string is empty; compilation is disabled.
    Disabled,
    /// The program could not be resolved.
    Missing { program: String },
    /// The program resolved to a path.
    Found { program: String, path: PathBuf },
}

/// Parse the configured compiler command into an argv array.
///
/// Uses shell-words so quoted arguments survive; no shell is involved.
pub fn parse_command(command: &str) -> Result<Vec<String>> {
    shell_words::split(command).map_err(|e| {
        ResumakeError::UserError(format!("invalid compiler_command '{}': {}", command, e))
    })
}

/// Probe the search path for the configured compiler.
pub fn probe(command: &str) -> Result<CompilerProbe> {
    let argv = parse_command(command)?;
    match argv.split_first() {
        None => Ok(CompilerProbe::Disabled),
        Some((program, _)) => match resolve_program(program) {
            Some(path) => Ok(CompilerProbe::Found {
                program: program.clone(),
                path,
            }),
            None => Ok(CompilerProbe::Missing {
                program: program.clone(),
            }),
        },
    }
}

/// Compile a rendered document in place.
///
/// The compiler is invoked with `-output-directory=<dir>` and the source
/// path appended to the configured command, streaming its output to the
/// current process's stdout/stderr.
///
/// # Returns
///
/// * `Ok(CompileStatus::Compiled)` - Compiler exited zero
/// * `Ok(CompileStatus::Skipped)` - No compiler configured or binary absent
/// * `Err(ResumakeError::CompilerError)` - Spawn failure or non-zero exit;
///   the rendered source is untouched
pub fn compile(command: &str, output_dir: &Path, source: &Path) -> Result<CompileStatus> {
    let argv = parse_command(command)?;
    let Some((program, base_args)) = argv.split_first() else {
        return Ok(CompileStatus::Skipped);
    };

    if resolve_program(program).is_none() {
        return Ok(CompileStatus::Skipped);
    }

    let status = Command::new(program)
        .args(base_args)
        .arg(format!("-output-directory={}", output_dir.display()))
        .arg(source)
        .status()
        .map_err(|e| ResumakeError::CompilerError(format!("failed to run '{}': {}", program, e)))?;

    if status.success() {
        Ok(CompileStatus::Compiled)
    } else {
        let exit = match status.code() {
            Some(code) => format!("exited with code {}", code),
            None => "was terminated by a signal".to_string(),
        };
        Err(ResumakeError::CompilerError(format!(
            "'{}' {}; the rendered document '{}' was still generated and remains on disk",
            program,
            exit,
            source.display()
        )))
    }
}

/// Resolve a program the way the OS would: a name containing a path
/// separator is checked directly, a bare name is searched on PATH.
fn resolve_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(candidate))
        .find(|path| path.is_file())
}
