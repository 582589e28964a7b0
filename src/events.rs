//! Run logging for resumake.
//!
//! Each state-changing step (a document render, a compile attempt) appends
//! one event to an NDJSON log, one JSON object per line, in
//! `.resumake/events.ndjson`. The log records event metadata only, never
//! the collected resume itself.
//!
//! Logging is best-effort: commands warn on a failed append but do not
//! fail because of it.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: the step performed (`render`, `compile`)
//! - `actor`: the user string (`user@HOST`)
//! - `artifact`: optional path of the file the event concerns
//! - `details`: freeform object with step-specific details

use crate::error::{ResumakeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default directory for the event log, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = ".resumake";

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A document was rendered and written.
    Render,
    /// A compile was attempted (details record the outcome).
    Compile,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Render => write!(f, "render"),
            EventAction::Compile => write!(f, "compile"),
        }
    }
}

/// An event record for the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Optional path of the artifact the event concerns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            artifact: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the artifact path for this event.
    pub fn with_artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ResumakeError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Get the path to the events file inside a log directory.
pub fn events_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join("events.ndjson")
}

/// Append an event to the run log, creating the log directory and file as
/// needed. Each append results in one line with a trailing newline.
pub fn append_event(log_dir: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if !log_dir.exists() {
        fs::create_dir_all(log_dir).map_err(|e| {
            ResumakeError::UserError(format!(
                "failed to create log directory '{}': {}",
                log_dir.display(),
                e
            ))
        })?;
    }

    let events_file = events_file_path(log_dir);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            ResumakeError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        ResumakeError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn event_creation_sets_actor_and_timestamp() {
        let event = Event::new(EventAction::Render);

        assert_eq!(event.action, EventAction::Render);
        assert!(!event.actor.is_empty());
        assert!(event.actor.contains('@'));
        assert!(event.artifact.is_none());
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn event_builder_sets_artifact_and_details() {
        let event = Event::new(EventAction::Compile)
            .with_artifact("output/cv.tex")
            .with_details(json!({"status": "skipped"}));

        assert_eq!(event.artifact, Some("output/cv.tex".to_string()));
        assert_eq!(event.details["status"], "skipped");
    }

    #[test]
    fn events_serialize_to_single_lines() {
        let event = Event::new(EventAction::Render)
            .with_artifact("output/cv.tex")
            .with_details(json!({"template": "template/resume.tex"}));

        let line = event.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));

        let parsed: Event = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.action, EventAction::Render);
        assert_eq!(parsed.artifact, Some("output/cv.tex".to_string()));
    }

    #[test]
    fn actions_serialize_to_snake_case() {
        let line = Event::new(EventAction::Compile).to_ndjson_line().unwrap();
        assert!(line.contains("\"compile\""));
    }

    #[test]
    fn artifact_field_is_omitted_when_absent() {
        let line = Event::new(EventAction::Render).to_ndjson_line().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(parsed.get("artifact").is_none());
    }

    #[test]
    fn append_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join(DEFAULT_LOG_DIR);
        assert!(!log_dir.exists());

        let event = Event::new(EventAction::Render).with_artifact("output/cv.tex");
        append_event(&log_dir, &event).unwrap();

        let content = fs::read_to_string(events_file_path(&log_dir)).unwrap();
        assert!(content.ends_with('\n'));
        let parsed: Event = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed.action, EventAction::Render);
    }

    #[test]
    fn append_accumulates_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().to_path_buf();

        append_event(&log_dir, &Event::new(EventAction::Render)).unwrap();
        append_event(
            &log_dir,
            &Event::new(EventAction::Compile).with_details(json!({"status": "ok"})),
        )
        .unwrap();

        let content = fs::read_to_string(events_file_path(&log_dir)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: Event = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.action, EventAction::Compile);
        assert_eq!(second.details["status"], "ok");
    }

    #[test]
    fn action_display_matches_wire_form() {
        assert_eq!(format!("{}", EventAction::Render), "render");
        assert_eq!(format!("{}", EventAction::Compile), "compile");
    }
}
