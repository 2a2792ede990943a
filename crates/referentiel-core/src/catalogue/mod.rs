//! Reference catalogues
//!
//! A catalogue describes one reference list served by the backend:
//! - the record and draft types exchanged on the wire
//! - the endpoint path under the API base URL
//! - the CSV layout used by exports
//! - the user-facing messages emitted by the list controller
//!
//! Two catalogues exist: [`Skills`] ("compétences") and [`JobSkills`]
//! ("compétences poste").

mod job_skill;
mod skill;

pub use job_skill::{JobSkill, JobSkillDraft, JobSkills};
pub use skill::{Skill, SkillDraft, Skills};

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record held in a loaded reference list
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Server-assigned identifier, absent until persisted
    fn id(&self) -> Option<i64>;

    /// Display name, unique within a list under case-insensitive comparison
    fn nom(&self) -> &str;

    /// Optional free-text description
    fn description(&self) -> Option<&str> {
        None
    }

    /// Values of the columns shown in the list view, in display order
    fn visible_columns(&self) -> Vec<String>;

    /// Fields of this record's CSV data row
    fn csv_fields(&self) -> Vec<String>;
}

/// User-facing messages for one catalogue
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// Detail shown when the list cannot be loaded
    pub load_failed: &'static str,
    /// Detail shown when a submitted name is already taken
    pub duplicate: &'static str,
    /// Detail shown after a successful create
    pub created: &'static str,
    /// Detail shown after a successful update
    pub updated: &'static str,
    /// Detail shown after a successful delete
    pub deleted: &'static str,
    /// Confirmation prompt shown before a delete
    pub confirm_delete: &'static str,
}

/// One reference list served by the backend
pub trait Catalogue: Send + Sync + 'static {
    /// Record type returned by the backend
    type Record: Record;
    /// Create/update payload, a record without its id
    type Draft: Debug + Serialize + Send + Sync;

    /// Endpoint path appended to the API base URL
    const PATH: &'static str;
    /// CLI command that lists this catalogue
    const COMMAND: &'static str;
    /// Fixed CSV header columns
    const CSV_HEADER: &'static [&'static str];
    /// Messages emitted by the list controller
    const MESSAGES: Messages;

    /// Build a draft from already-trimmed form values
    fn draft(nom: String, description: Option<String>) -> Self::Draft;
}

/// Prefix of the synthetic reference token written to CSV exports
pub const REFERENCE_PREFIX: &str = "COMP-";

/// Synthetic reference token for a record id (`COMP-{id}`)
pub fn reference(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{}{}", REFERENCE_PREFIX, id),
        None => REFERENCE_PREFIX.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_token() {
        assert_eq!(reference(Some(7)), "COMP-7");
        assert_eq!(reference(None), "COMP-");
    }

    #[test]
    fn test_catalogue_paths() {
        assert_eq!(Skills::PATH, "competences");
        assert_eq!(JobSkills::PATH, "competences-poste");
    }
}
