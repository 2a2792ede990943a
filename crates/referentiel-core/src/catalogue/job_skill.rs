//! Compétences poste

use serde::{Deserialize, Serialize};

use super::{Catalogue, Messages, Record, reference};

/// Placeholder written to CSV exports for a missing description
pub const UNSPECIFIED: &str = "Non spécifié";

/// A skill attached to job postings, with an optional description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSkill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl JobSkill {
    /// Create a persisted job skill without description
    pub fn new(id: i64, nom: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            nom: nom.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Record for JobSkill {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn nom(&self) -> &str {
        &self.nom
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn visible_columns(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.nom.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }

    fn csv_fields(&self) -> Vec<String> {
        let description = match self.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => UNSPECIFIED.to_string(),
        };
        vec![reference(self.id), self.nom.clone(), description]
    }
}

/// Create/update payload for a job skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSkillDraft {
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The "compétences poste" catalogue
#[derive(Debug, Clone, Copy, Default)]
pub struct JobSkills;

impl Catalogue for JobSkills {
    type Record = JobSkill;
    type Draft = JobSkillDraft;

    const PATH: &'static str = "competences-poste";
    const COMMAND: &'static str = "job-skills";
    const CSV_HEADER: &'static [&'static str] = &["Référence", "Nom", "Description"];
    const MESSAGES: Messages = Messages {
        load_failed: "Impossible de charger les compétences poste",
        duplicate: "Cette compétence poste existe déjà",
        created: "Compétence poste ajoutée avec succès",
        updated: "Compétence poste mise à jour avec succès",
        deleted: "Compétence poste supprimée avec succès",
        confirm_delete: "Êtes-vous sûr de vouloir supprimer cette compétence poste?",
    };

    fn draft(nom: String, description: Option<String>) -> JobSkillDraft {
        JobSkillDraft { nom, description }
    }
}
