//! Resume data model.
//!
//! A [`Resume`] is built field-by-field by the collector and never mutated
//! after handoff to rendering. The structured form is not persisted; only
//! its rendered projection reaches disk.

use serde::{Deserialize, Serialize};

/// The complete structured record of a person's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    /// Validated against a `local@domain.tld` pattern at collection time.
    pub email: String,
    /// Validated as exactly 10 decimal digits at collection time.
    pub phone: String,
    pub location: String,
    pub github: String,
    pub introduction: String,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
}

/// Four ordered groups of short skill tags. Any group may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    pub programming: Vec<String>,
    pub frameworks: Vec<String>,
    pub other: Vec<String>,
    pub soft: Vec<String>,
}

/// One education entry. All fields are free text; no cross-validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub major: String,
    pub year: String,
    pub location: String,
}

/// One experience entry. The end date is not required to follow the start
/// date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
}

/// One project entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tech: String,
    pub summary: String,
}

/// One achievement entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub event: String,
    pub date: String,
}
