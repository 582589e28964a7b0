//! Template loading and resume rendering.
//!
//! A [`Template`] is parsed once, up front, and passed explicitly to the
//! code that needs it. A missing or malformed template file aborts the run
//! before any interactive prompting starts; template correctness is the
//! template author's responsibility and is not validated beyond syntax.

pub mod engine;

use crate::error::{ResumakeError, Result};
use crate::resume::{Achievement, Education, Experience, Project, Resume};
use engine::{Ast, Scope, Value};
use std::path::{Path, PathBuf};

/// A parsed document template.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    ast: Ast,
}

impl Template {
    /// Read and parse a template file.
    ///
    /// # Returns
    ///
    /// * `Ok(Template)` - Ready for rendering
    /// * `Err(ResumakeError::TemplateError)` - File missing or syntax error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path).map_err(|e| {
            ResumakeError::TemplateError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(path, &source)
    }

    /// Parse template source, recording the path for error messages.
    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let ast = engine::parse(source).map_err(|e| {
            ResumakeError::TemplateError(format!(
                "failed to parse template '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            ast,
        })
    }

    /// The path this template was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a resume against this template.
    ///
    /// Scalar fields substitute by name; sequence fields iterate in
    /// collection order. An undefined placeholder is a render error, never
    /// a silent empty substitution.
    pub fn render(&self, resume: &Resume) -> Result<String> {
        self.ast
            .render(&resume_scope(resume))
            .map_err(|e| ResumakeError::RenderError(e.to_string()))
    }
}

/// Map a resume onto the placeholder names the template contract exposes.
fn resume_scope(resume: &Resume) -> Scope {
    let mut scope = Scope::new();

    scope.insert("name".to_string(), Value::Text(resume.name.clone()));
    scope.insert("email".to_string(), Value::Text(resume.email.clone()));
    scope.insert("phone".to_string(), Value::Text(resume.phone.clone()));
    scope.insert("location".to_string(), Value::Text(resume.location.clone()));
    scope.insert("github".to_string(), Value::Text(resume.github.clone()));
    scope.insert(
        "introduction".to_string(),
        Value::Text(resume.introduction.clone()),
    );

    scope.insert(
        "skills_programming".to_string(),
        Value::Items(resume.skills.programming.clone()),
    );
    scope.insert(
        "skills_frameworks".to_string(),
        Value::Items(resume.skills.frameworks.clone()),
    );
    scope.insert(
        "skills_other".to_string(),
        Value::Items(resume.skills.other.clone()),
    );
    scope.insert(
        "skills_soft".to_string(),
        Value::Items(resume.skills.soft.clone()),
    );

    scope.insert(
        "education".to_string(),
        Value::Entries(resume.education.iter().map(education_entry).collect()),
    );
    scope.insert(
        "experience".to_string(),
        Value::Entries(resume.experience.iter().map(experience_entry).collect()),
    );
    scope.insert(
        "projects".to_string(),
        Value::Entries(resume.projects.iter().map(project_entry).collect()),
    );
    scope.insert(
        "achievements".to_string(),
        Value::Entries(resume.achievements.iter().map(achievement_entry).collect()),
    );

    scope
}

fn education_entry(entry: &Education) -> Scope {
    Scope::from([
        (
            "institution".to_string(),
            Value::Text(entry.institution.clone()),
        ),
        ("degree".to_string(), Value::Text(entry.degree.clone())),
        ("major".to_string(), Value::Text(entry.major.clone())),
        ("year".to_string(), Value::Text(entry.year.clone())),
        ("location".to_string(), Value::Text(entry.location.clone())),
    ])
}

fn experience_entry(entry: &Experience) -> Scope {
    Scope::from([
        ("title".to_string(), Value::Text(entry.title.clone())),
        ("company".to_string(), Value::Text(entry.company.clone())),
        ("start".to_string(), Value::Text(entry.start.clone())),
        ("end".to_string(), Value::Text(entry.end.clone())),
        ("bullets".to_string(), Value::Items(entry.bullets.clone())),
    ])
}

fn project_entry(entry: &Project) -> Scope {
    Scope::from([
        ("name".to_string(), Value::Text(entry.name.clone())),
        ("tech".to_string(), Value::Text(entry.tech.clone())),
        ("summary".to_string(), Value::Text(entry.summary.clone())),
    ])
}

fn achievement_entry(entry: &Achievement) -> Scope {
    Scope::from([
        ("name".to_string(), Value::Text(entry.name.clone())),
        ("event".to_string(), Value::Text(entry.event.clone())),
        ("date".to_string(), Value::Text(entry.date.clone())),
    ])
}
