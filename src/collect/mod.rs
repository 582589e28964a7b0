//! Interactive collection of a complete resume.
//!
//! The collector walks a fixed sequence of prompts over a line-oriented
//! input stream and builds a [`Resume`] in memory. Two fields (email,
//! phone) are validated with an indefinite retry loop; repeated sections
//! are driven by count prompts and the field descriptor tables in
//! [`fields`].
//!
//! Every read consumes a full line, including counts, so no prompt can
//! silently pick up residue from a previous numeric read. The collector is
//! generic over its reader and writer so tests can drive it with in-memory
//! buffers.

pub mod fields;
pub mod validators;

use crate::error::{ResumakeError, Result};
use crate::resume::{Achievement, Education, Experience, Project, Resume, Skills};
use fields::{FieldReader, FieldSpec, FieldValue};
use std::io::{BufRead, Write};
use validators::{ValidatorKind, Validators};

/// Upper bound on entries per repeated section. Counts above this are
/// rejected and re-prompted, the same as negative or non-numeric input.
pub const MAX_SECTION_ENTRIES: usize = 100;

/// Prompt-driven reader over an input/output stream pair.
pub struct Collector<R, W> {
    input: R,
    output: W,
    validators: Validators,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    /// Create a collector over the given streams.
    pub fn new(input: R, output: W) -> Result<Self> {
        Ok(Self {
            input,
            output,
            validators: Validators::compile()?,
        })
    }

    /// Emit a prompt and read one line, trimmed of surrounding whitespace.
    ///
    /// A closed input stream is a user error: collection cannot finish
    /// without the remaining answers.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).map_err(stream_error)?;
        self.output.flush().map_err(stream_error)?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line).map_err(stream_error)?;
        if bytes_read == 0 {
            return Err(ResumakeError::UserError(
                "input stream closed before collection finished".to_string(),
            ));
        }

        Ok(line.trim().to_string())
    }

    /// Write a message line to the output stream outside of any prompt.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).map_err(stream_error)
    }

    /// Repeat [`read_line`](Self::read_line) until the validator accepts
    /// the trimmed text. There is no retry limit; the loop ends when the
    /// input is valid or the stream closes.
    pub fn read_validated(&mut self, prompt: &str, kind: ValidatorKind) -> Result<String> {
        loop {
            let input = self.read_line(prompt)?;
            if self.validators.accepts(kind, &input) {
                return Ok(input);
            }
            self.say(kind.rejection_message())?;
        }
    }

    /// Read lines under a fixed `- ` sub-prompt until an empty line.
    /// Entry order is preserved; an immediate empty line yields an empty
    /// list.
    pub fn read_list(&mut self, prompt: &str) -> Result<Vec<String>> {
        self.say(&format!("{} (enter an empty line to stop):", prompt))?;

        let mut items = Vec::new();
        loop {
            let input = self.read_line("- ")?;
            if input.is_empty() {
                break;
            }
            items.push(input);
        }
        Ok(items)
    }

    /// Read a non-negative entry count, re-prompting on non-numeric,
    /// negative, or out-of-range input.
    pub fn read_count(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let input = self.read_line(prompt)?;
            match input.parse::<usize>() {
                Ok(count) if count <= MAX_SECTION_ENTRIES => return Ok(count),
                _ => self.say(&format!(
                    "Please enter a whole number between 0 and {}.",
                    MAX_SECTION_ENTRIES
                ))?,
            }
        }
    }

    /// Read `count` items, each under a numbered `label #n:` prompt.
    fn read_counted_items(&mut self, count_prompt: &str, item_label: &str) -> Result<Vec<String>> {
        let count = self.read_count(count_prompt)?;
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            items.push(self.read_line(&format!("{} #{}: ", item_label, index + 1))?);
        }
        Ok(items)
    }

    /// Collect `count` structured entries by walking a field descriptor
    /// list in order. A count of zero issues no per-entry prompts.
    pub fn read_entries(
        &mut self,
        section: &str,
        specs: &[FieldSpec],
    ) -> Result<Vec<Vec<FieldValue>>> {
        let count = self.read_count(&format!("How many {} entries? ", section))?;

        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            self.say(&format!("{} #{}:", section, index + 1))?;

            let mut values = Vec::with_capacity(specs.len());
            for spec in specs {
                let value = match spec.reader {
                    FieldReader::Line => FieldValue::Text(self.read_line(spec.prompt)?),
                    FieldReader::Validated(kind) => {
                        FieldValue::Text(self.read_validated(spec.prompt, kind)?)
                    }
                    FieldReader::List => FieldValue::Items(self.read_list(spec.prompt)?),
                    FieldReader::Counted { item_label } => {
                        FieldValue::Items(self.read_counted_items(spec.prompt, item_label)?)
                    }
                };
                values.push(value);
            }
            entries.push(values);
        }
        Ok(entries)
    }

    fn collect_education(&mut self) -> Result<Vec<Education>> {
        let entries = self.read_entries("Education", fields::EDUCATION_FIELDS)?;
        Ok(entries.into_iter().map(education_from_values).collect())
    }

    fn collect_experience(&mut self) -> Result<Vec<Experience>> {
        let entries = self.read_entries("Experience", fields::EXPERIENCE_FIELDS)?;
        Ok(entries.into_iter().map(experience_from_values).collect())
    }

    fn collect_projects(&mut self) -> Result<Vec<Project>> {
        let entries = self.read_entries("Project", fields::PROJECT_FIELDS)?;
        Ok(entries.into_iter().map(project_from_values).collect())
    }

    fn collect_achievements(&mut self) -> Result<Vec<Achievement>> {
        let entries = self.read_entries("Achievement", fields::ACHIEVEMENT_FIELDS)?;
        Ok(entries.into_iter().map(achievement_from_values).collect())
    }
}

/// Collect a complete resume through the fixed prompt sequence.
///
/// Order: identity scalars, validated email and phone, four skill lists,
/// then Education, Experience, Projects, Achievements.
pub fn collect<R: BufRead, W: Write>(collector: &mut Collector<R, W>) -> Result<Resume> {
    let name = collector.read_line("Name: ")?;
    let email = collector.read_validated("Email: ", ValidatorKind::Email)?;
    let phone = collector.read_validated("Phone: ", ValidatorKind::Phone)?;
    let location = collector.read_line("Location: ")?;
    let github = collector.read_line("Github: ")?;
    let introduction = collector.read_line("Introduction: ")?;

    let skills = Skills {
        programming: collector.read_list("Enter programming skills")?,
        frameworks: collector.read_list("Enter frameworks")?,
        other: collector.read_list("Enter other skills")?,
        soft: collector.read_list("Enter soft skills")?,
    };

    let education = collector.collect_education()?;
    let experience = collector.collect_experience()?;
    let projects = collector.collect_projects()?;
    let achievements = collector.collect_achievements()?;

    Ok(Resume {
        name,
        email,
        phone,
        location,
        github,
        introduction,
        skills,
        education,
        experience,
        projects,
        achievements,
    })
}

fn stream_error(err: std::io::Error) -> ResumakeError {
    ResumakeError::UserError(format!("input/output stream failure: {}", err))
}

fn next_text(values: &mut impl Iterator<Item = FieldValue>) -> String {
    values.next().map(FieldValue::into_text).unwrap_or_default()
}

fn next_items(values: &mut impl Iterator<Item = FieldValue>) -> Vec<String> {
    values.next().map(FieldValue::into_items).unwrap_or_default()
}

fn education_from_values(values: Vec<FieldValue>) -> Education {
    let mut values = values.into_iter();
    Education {
        institution: next_text(&mut values),
        degree: next_text(&mut values),
        major: next_text(&mut values),
        year: next_text(&mut values),
        location: next_text(&mut values),
    }
}

fn experience_from_values(values: Vec<FieldValue>) -> Experience {
    let mut values = values.into_iter();
    Experience {
        title: next_text(&mut values),
        company: next_text(&mut values),
        start: next_text(&mut values),
        end: next_text(&mut values),
        bullets: next_items(&mut values),
    }
}

fn project_from_values(values: Vec<FieldValue>) -> Project {
    let mut values = values.into_iter();
    Project {
        name: next_text(&mut values),
        tech: next_text(&mut values),
        summary: next_text(&mut values),
    }
}

fn achievement_from_values(values: Vec<FieldValue>) -> Achievement {
    let mut values = values.into_iter();
    Achievement {
        name: next_text(&mut values),
        event: next_text(&mut values),
        date: next_text(&mut values),
    }
}
