//! Error types for the resumake CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for resumake operations.
///
/// Each variant maps to a specific exit code so callers can distinguish
/// failure causes without parsing messages.
#[derive(Error, Debug)]
pub enum ResumakeError {
    /// User provided invalid arguments, config, or the input stream closed.
    #[error("{0}")]
    UserError(String),

    /// The template file is missing or malformed.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// The rendered output could not be written.
    #[error("Output error: {0}")]
    IoError(String),

    /// A placeholder could not be substituted during rendering.
    #[error("Render failed: {0}")]
    RenderError(String),

    /// The external compiler could not be run or exited non-zero.
    #[error("Compiler failed: {0}")]
    CompilerError(String),
}

impl ResumakeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResumakeError::UserError(_) => exit_codes::USER_ERROR,
            ResumakeError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
            ResumakeError::IoError(_) => exit_codes::IO_FAILURE,
            ResumakeError::RenderError(_) => exit_codes::RENDER_FAILURE,
            ResumakeError::CompilerError(_) => exit_codes::COMPILER_FAILURE,
        }
    }
}

/// Result type alias for resumake operations.
pub type Result<T> = std::result::Result<T, ResumakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ResumakeError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn template_error_has_correct_exit_code() {
        let err = ResumakeError::TemplateError("missing file".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = ResumakeError::IoError("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn render_error_has_correct_exit_code() {
        let err = ResumakeError::RenderError("undefined placeholder".to_string());
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
    }

    #[test]
    fn compiler_error_has_correct_exit_code() {
        let err = ResumakeError::CompilerError("pdflatex exited with code 1".to_string());
        assert_eq!(err.exit_code(), exit_codes::COMPILER_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ResumakeError::TemplateError("failed to read 'template/resume.tex'".to_string());
        assert_eq!(
            err.to_string(),
            "Template error: failed to read 'template/resume.tex'"
        );

        let err = ResumakeError::UserError("input stream closed".to_string());
        assert_eq!(err.to_string(), "input stream closed");
    }
}
