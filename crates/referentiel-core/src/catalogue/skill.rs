//! Compétences

use serde::{Deserialize, Serialize};

use super::{Catalogue, Messages, Record, reference};

/// A named skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
}

impl Skill {
    /// Create a persisted skill
    pub fn new(id: i64, nom: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            nom: nom.into(),
        }
    }
}

impl Record for Skill {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn nom(&self) -> &str {
        &self.nom
    }

    fn visible_columns(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.nom.clone(),
        ]
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![reference(self.id), self.nom.clone()]
    }
}

/// Create/update payload for a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDraft {
    pub nom: String,
}

/// The "compétences" catalogue
#[derive(Debug, Clone, Copy, Default)]
pub struct Skills;

impl Catalogue for Skills {
    type Record = Skill;
    type Draft = SkillDraft;

    const PATH: &'static str = "competences";
    const COMMAND: &'static str = "skills";
    const CSV_HEADER: &'static [&'static str] = &["Référence", "Nom de la Compétence"];
    const MESSAGES: Messages = Messages {
        load_failed: "Impossible de charger les compétences",
        duplicate: "Cette compétence existe déjà",
        created: "Compétence ajoutée avec succès",
        updated: "Compétence mise à jour avec succès",
        deleted: "Compétence supprimée avec succès",
        confirm_delete: "Êtes-vous sûr de vouloir supprimer cette compétence ?",
    };

    fn draft(nom: String, _description: Option<String>) -> SkillDraft {
        SkillDraft { nom }
    }
}
