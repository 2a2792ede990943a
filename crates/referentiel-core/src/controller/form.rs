//! Add/edit form state and validation

use crate::catalogue::Record;

/// Minimum length of a record name, in characters
pub const NOM_MIN_LENGTH: usize = 2;

/// A failed field validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name is empty
    Required,
    /// The name is shorter than the minimum length
    MinLength { required: usize, actual: usize },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "nom is required"),
            FieldError::MinLength { required, actual } => write!(
                f,
                "nom must be at least {} characters (got {})",
                required, actual
            ),
        }
    }
}

/// Values of an add or edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub nom: String,
    pub description: String,
    touched: bool,
}

impl RecordForm {
    /// Create a form with the given values
    pub fn new(nom: impl Into<String>) -> Self {
        Self {
            nom: nom.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Clear every value and the touched flag
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fill the form from an existing record
    pub fn patch_from<R: Record>(&mut self, record: &R) {
        self.nom = record.nom().to_string();
        self.description = record.description().unwrap_or_default().to_string();
    }

    /// Flag every field as touched so validation errors become visible
    pub fn mark_all_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Validate the form, returning every field error
    pub fn validate(&self) -> Vec<FieldError> {
        let length = self.nom.trim().chars().count();
        if length == 0 {
            vec![FieldError::Required]
        } else if length < NOM_MIN_LENGTH {
            vec![FieldError::MinLength {
                required: NOM_MIN_LENGTH,
                actual: length,
            }]
        } else {
            Vec::new()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Trimmed name
    pub fn trimmed_nom(&self) -> String {
        self.nom.trim().to_string()
    }

    /// Trimmed description, `None` when blank
    pub fn trimmed_description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }
}
