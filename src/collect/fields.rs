//! Field descriptors for structured-entry collection.
//!
//! Each repeated section (Education, Experience, Projects, Achievements) is
//! described by an ordered list of [`FieldSpec`]s. One generic routine walks
//! the list per entry, so the sections share a single collection loop
//! instead of four near-duplicate ones.

use crate::collect::validators::ValidatorKind;

/// How a single field of a structured entry is read.
#[derive(Debug, Clone, Copy)]
pub enum FieldReader {
    /// One trimmed line.
    Line,
    /// One line, re-prompted until the validator accepts it.
    Validated(ValidatorKind),
    /// Lines until an empty line is entered.
    List,
    /// A count followed by that many lines, each prompted with the label.
    Counted { item_label: &'static str },
}

/// One field of a structured entry: prompt text plus reader kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub prompt: &'static str,
    pub reader: FieldReader,
}

/// A value produced by reading one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Items(Vec<String>),
}

impl FieldValue {
    /// Collapse into scalar text. List values join with a comma.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Items(items) => items.join(", "),
        }
    }

    /// Collapse into a list. A scalar becomes a one-element list.
    pub fn into_items(self) -> Vec<String> {
        match self {
            FieldValue::Items(items) => items,
            FieldValue::Text(text) => vec![text],
        }
    }
}

pub const EDUCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { prompt: "Institution: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Degree: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Major: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Year: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Location: ", reader: FieldReader::Line },
];

pub const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec { prompt: "Title: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Company: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Start Date: ", reader: FieldReader::Line },
    FieldSpec { prompt: "End Date: ", reader: FieldReader::Line },
    FieldSpec {
        prompt: "How many bullet points? ",
        reader: FieldReader::Counted { item_label: "Bullet" },
    },
];

pub const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec { prompt: "Name: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Technologies Used: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Summary: ", reader: FieldReader::Line },
];

pub const ACHIEVEMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec { prompt: "Name: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Event: ", reader: FieldReader::Line },
    FieldSpec { prompt: "Date: ", reader: FieldReader::Line },
];
