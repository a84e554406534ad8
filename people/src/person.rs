//! People records shown in the table.

use crate::error::PeopleError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Sex as recorded in the people data (`"m"` / `"f"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    /// Recorded as `"m"`
    #[serde(rename = "m")]
    Male,
    /// Recorded as `"f"`
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Value as it appears in the data and in the table
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single person
///
/// `mother` and `father` are filled in by [`link_parents`] when the parent
/// is part of the same data set; otherwise only the names are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Full name
    pub name: String,
    /// Sex
    pub sex: Sex,
    /// Year of birth
    pub born: i32,
    /// Year of death
    pub died: i32,
    /// Father's name, if known
    #[serde(default)]
    pub father_name: Option<String>,
    /// Mother's name, if known
    #[serde(default)]
    pub mother_name: Option<String>,
    /// URL-safe identifier
    pub slug: String,
    /// Resolved mother record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<Box<Person>>,
    /// Resolved father record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<Box<Person>>,
}

impl Person {
    /// Copy of this person without resolved parents
    #[must_use]
    pub fn shallow(&self) -> Self {
        Self {
            mother: None,
            father: None,
            ..self.clone()
        }
    }
}

/// Resolve `mother` and `father` by name within `people`
///
/// Linked parents are shallow copies, so records never nest more than one
/// level deep. Names that match nobody leave the parent unresolved.
pub fn link_parents(people: &mut [Person]) {
    let by_name: HashMap<String, Person> = people
        .iter()
        .map(|person| (person.name.clone(), person.shallow()))
        .collect();

    let resolve = |name: Option<&String>| {
        name.and_then(|name| by_name.get(name))
            .map(|parent| Box::new(parent.clone()))
    };

    for person in people.iter_mut() {
        person.mother = resolve(person.mother_name.as_ref());
        person.father = resolve(person.father_name.as_ref());
    }
}

/// Parse a JSON array of people
///
/// # Errors
///
/// Returns [`PeopleError::Parse`] if `json` is not an array of people.
pub fn parse_people(json: &str) -> Result<Vec<Person>, PeopleError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON file of people
///
/// # Errors
///
/// Returns [`PeopleError::Read`] if the file cannot be read and
/// [`PeopleError::Parse`] if its content is not an array of people.
pub async fn load_people(path: &Path) -> Result<Vec<Person>, PeopleError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PeopleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let people = parse_people(&json)?;
    tracing::debug!(path = %path.display(), count = people.len(), "Loaded people");
    Ok(people)
}
