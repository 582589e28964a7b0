//! Configuration loading for resumake.
//!
//! Config lives in an optional `resumake.yaml` in the working directory.
//! Unknown fields in the YAML are ignored for forward compatibility, and a
//! missing file falls back to defaults. CLI flags override config values.

use crate::error::{ResumakeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a resumake run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the rendered document (and any PDF) is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Path to the template file.
    #[serde(default = "default_template")]
    pub template: String,

    /// Compiler command used to produce a PDF (shell-words parsed; no
    /// shell). An empty string disables compilation entirely.
    #[serde(default = "default_compiler_command")]
    pub compiler_command: String,

    /// File extension of the rendered document (no leading dot).
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_output_dir() -> String {
    "output".to_string()
}
fn default_template() -> String {
    "template/resume.tex".to_string()
}
fn default_compiler_command() -> String {
    "pdflatex".to_string()
}
fn default_extension() -> String {
    "tex".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            template: default_template(),
            compiler_command: default_compiler_command(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the resumake.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded (or defaulted) and validated config
    /// * `Err(ResumakeError::UserError)` - Read, parse, or validation failure
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumakeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ResumakeError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `output_dir` and `template` must be non-empty
    /// - `extension` must be non-empty and have no leading dot
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.is_empty() {
            return Err(ResumakeError::UserError(
                "config validation failed: output_dir must be non-empty".to_string(),
            ));
        }

        if self.template.is_empty() {
            return Err(ResumakeError::UserError(
                "config validation failed: template must be non-empty".to_string(),
            ));
        }

        if self.extension.is_empty() {
            return Err(ResumakeError::UserError(
                "config validation failed: extension must be non-empty".to_string(),
            ));
        }
        if self.extension.starts_with('.') {
            return Err(ResumakeError::UserError(format!(
                "config validation failed: extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.extension,
                self.extension.trim_start_matches('.')
            )));
        }

        Ok(())
    }
}
