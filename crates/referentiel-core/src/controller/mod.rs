//! List controllers
//!
//! A [`ListController`] holds the loaded records of one catalogue and
//! mediates every user action on them: reload, add, edit, delete, filter,
//! selection and CSV export. It talks to the backend through a
//! [`RecordGateway`] and to the user through a [`Notifier`], both injected
//! at construction.
//!
//! The list is only ever replaced by a full reload after a successful
//! round-trip, so a failed call never leaves it partially mutated.

mod form;

use std::path::{Path, PathBuf};

pub use form::{FieldError, NOM_MIN_LENGTH, RecordForm};

use tracing::{debug, info, warn};

use crate::catalogue::{Catalogue, JobSkills, Record, Skills};
use crate::error::{Error, Result};
use crate::export::{CsvExport, FULL_LABEL, SELECTION_LABEL};
use crate::gateway::RecordGateway;
use crate::notify::{Notifier, Severity, titles};

const ADD_FAILED: &str = "Erreur lors de l'ajout";
const UPDATE_FAILED: &str = "Erreur lors de la mise à jour";
const DELETE_FAILED: &str = "Erreur lors de la suppression";
const DELETE_CANCELLED: &str = "Suppression annulée";
const EXPORT_FAILED: &str = "Erreur lors de l'export";

/// Result of a controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action completed
    Done,
    /// The form failed validation; nothing was sent
    Invalid,
    /// The name is already used in the loaded list; nothing was sent
    Duplicate,
    /// The user declined the confirmation prompt
    Cancelled,
    /// The backend call failed
    Failed,
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

/// Controller for the "compétences" list
pub type SkillListController<G, N> = ListController<Skills, G, N>;

/// Controller for the "compétences poste" list
pub type JobSkillListController<G, N> = ListController<JobSkills, G, N>;

/// In-memory list of one catalogue plus its dialog and form state
pub struct ListController<K: Catalogue, G, N> {
    gateway: G,
    notifier: N,
    items: Vec<K::Record>,
    /// Copy of the record being edited
    selected: Option<K::Record>,
    /// Rows picked for export
    multi_selected: Vec<K::Record>,
    filter_text: String,
    add_dialog_visible: bool,
    edit_dialog_visible: bool,
    add_form: RecordForm,
    edit_form: RecordForm,
}

impl<K, G, N> ListController<K, G, N>
where
    K: Catalogue,
    G: RecordGateway<K>,
    N: Notifier,
{
    /// Create a controller with an empty list
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            gateway,
            notifier,
            items: Vec::new(),
            selected: None,
            multi_selected: Vec::new(),
            filter_text: String::new(),
            add_dialog_visible: false,
            edit_dialog_visible: false,
            add_form: RecordForm::default(),
            edit_form: RecordForm::default(),
        }
    }

    pub fn items(&self) -> &[K::Record] {
        &self.items
    }

    /// Loaded record with the given id
    pub fn find(&self, id: i64) -> Option<&K::Record> {
        self.items.iter().find(|r| r.id() == Some(id))
    }

    pub fn selected(&self) -> Option<&K::Record> {
        self.selected.as_ref()
    }

    pub fn multi_selected(&self) -> &[K::Record] {
        &self.multi_selected
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn is_add_dialog_visible(&self) -> bool {
        self.add_dialog_visible
    }

    pub fn is_edit_dialog_visible(&self) -> bool {
        self.edit_dialog_visible
    }

    pub fn add_form(&self) -> &RecordForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut RecordForm {
        &mut self.add_form
    }

    pub fn edit_form(&self) -> &RecordForm {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut RecordForm {
        &mut self.edit_form
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Replace the list with the backend's full collection
    ///
    /// On failure the current list is kept and an error is notified.
    pub async fn reload(&mut self) -> Outcome {
        match self.gateway.list().await {
            Ok(records) => {
                debug!(catalogue = K::PATH, count = records.len(), "List reloaded");
                self.items = records;
                self.refresh_selection();
                Outcome::Done
            }
            Err(e) => {
                warn!(catalogue = K::PATH, error = %e, "Failed to load list");
                self.notifier
                    .notify(Severity::Error, titles::ERROR, K::MESSAGES.load_failed);
                Outcome::Failed
            }
        }
    }

    /// Reset the add form and open the add dialog
    pub fn open_add(&mut self) {
        self.add_form.reset();
        self.add_dialog_visible = true;
    }

    pub fn close_add(&mut self) {
        self.add_dialog_visible = false;
    }

    /// Take a copy of `item` as the edit target and open the edit dialog
    pub fn open_edit(&mut self, item: &K::Record) {
        self.selected = Some(item.clone());
        self.edit_form.patch_from(item);
        self.edit_dialog_visible = true;
    }

    pub fn close_edit(&mut self) {
        self.edit_dialog_visible = false;
    }

    /// Validate the add form and create the record
    pub async fn submit_add(&mut self) -> Outcome {
        if !self.add_form.is_valid() {
            self.add_form.mark_all_as_touched();
            return Outcome::Invalid;
        }

        let nom = self.add_form.trimmed_nom();
        let description = self.add_form.trimmed_description();

        if self.name_taken(&nom, None) {
            self.notifier
                .notify(Severity::Error, titles::ERROR, K::MESSAGES.duplicate);
            return Outcome::Duplicate;
        }

        match self.gateway.create(&K::draft(nom, description)).await {
            Ok(created) => {
                info!(catalogue = K::PATH, id = ?created.id(), "Record created");
                self.notifier
                    .notify(Severity::Success, titles::SUCCESS, K::MESSAGES.created);
                self.reload().await;
                self.add_dialog_visible = false;
                Outcome::Done
            }
            Err(e) => {
                self.notify_failure(&e, ADD_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Validate the edit form and update the edit target
    pub async fn submit_edit(&mut self) -> Outcome {
        let target = self.selected.as_ref().and_then(|r| r.id());
        let Some(id) = target.filter(|_| self.edit_form.is_valid()) else {
            self.edit_form.mark_all_as_touched();
            return Outcome::Invalid;
        };

        let nom = self.edit_form.trimmed_nom();
        let description = self.edit_form.trimmed_description();

        if self.name_taken(&nom, Some(id)) {
            self.notifier
                .notify(Severity::Error, titles::ERROR, K::MESSAGES.duplicate);
            return Outcome::Duplicate;
        }

        match self.gateway.update(id, &K::draft(nom, description)).await {
            Ok(_) => {
                info!(catalogue = K::PATH, id, "Record updated");
                self.notifier
                    .notify(Severity::Success, titles::SUCCESS, K::MESSAGES.updated);
                self.reload().await;
                self.edit_dialog_visible = false;
                Outcome::Done
            }
            Err(e) => {
                self.notify_failure(&e, UPDATE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Ask for confirmation, then delete the record with the given id
    pub async fn request_delete(&mut self, id: i64) -> Outcome {
        if !self.notifier.confirm(K::MESSAGES.confirm_delete) {
            self.notifier
                .notify(Severity::Info, titles::CANCELLED, DELETE_CANCELLED);
            return Outcome::Cancelled;
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                info!(catalogue = K::PATH, id, "Record deleted");
                self.notifier
                    .notify(Severity::Success, titles::SUCCESS, K::MESSAGES.deleted);
                self.reload().await;
                Outcome::Done
            }
            Err(e) => {
                self.notify_failure(&e, DELETE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Set the global filter text
    pub fn apply_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Rows matching the filter text
    ///
    /// A row matches when any visible column contains the filter text,
    /// ignoring case. An empty filter matches every row.
    pub fn visible_items(&self) -> Vec<&K::Record> {
        let needle = self.filter_text.to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|record| {
                record
                    .visible_columns()
                    .iter()
                    .any(|column| column.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Add the loaded record with the given id to the export selection
    ///
    /// Returns false when no loaded record has that id.
    pub fn select(&mut self, id: i64) -> bool {
        let Some(record) = self.find(id).cloned() else {
            return false;
        };
        if !self.multi_selected.iter().any(|r| r.id() == Some(id)) {
            self.multi_selected.push(record);
        }
        true
    }

    pub fn deselect(&mut self, id: i64) {
        self.multi_selected.retain(|r| r.id() != Some(id));
    }

    pub fn clear_selection(&mut self) {
        self.multi_selected.clear();
    }

    /// Export the selected rows, or the whole list when nothing is selected,
    /// into a dated CSV file under `dir`
    ///
    /// Returns `Ok(None)` when the user declines the confirmation prompt.
    /// The success notification is only sent once the file is on disk.
    pub fn export_csv(&mut self, dir: &Path) -> Result<Option<PathBuf>> {
        let (prompt, label, records) = if self.multi_selected.is_empty() {
            (
                "Aucune compétence sélectionnée. Voulez-vous exporter toutes les compétences ?"
                    .to_string(),
                FULL_LABEL,
                &self.items,
            )
        } else {
            (
                format!(
                    "Voulez-vous exporter les {} compétences sélectionnées ?",
                    self.multi_selected.len()
                ),
                SELECTION_LABEL,
                &self.multi_selected,
            )
        };

        if !self.notifier.confirm(&prompt) {
            debug!(catalogue = K::PATH, "Export declined");
            return Ok(None);
        }

        let export = CsvExport::new::<K>(label, records);
        match export.write_to(dir) {
            Ok(path) => {
                self.notifier.notify(
                    Severity::Success,
                    titles::EXPORT_DONE,
                    &format!("{} compétences exportées", export.count),
                );
                Ok(Some(path))
            }
            Err(e) => {
                warn!(catalogue = K::PATH, dir = %dir.display(), error = %e, "Export failed");
                self.notifier.notify(Severity::Error, titles::ERROR, EXPORT_FAILED);
                Err(e)
            }
        }
    }

    /// Whether another loaded record already uses `nom`, ignoring case
    fn name_taken(&self, nom: &str, exclude: Option<i64>) -> bool {
        let nom = nom.to_lowercase();
        self.items.iter().any(|record| {
            record.nom().to_lowercase() == nom && (exclude.is_none() || record.id() != exclude)
        })
    }

    /// Keep selected rows that survived a reload, refreshed from the new list
    fn refresh_selection(&mut self) {
        let items = &self.items;
        self.multi_selected = self
            .multi_selected
            .iter()
            .filter_map(|selected| {
                items
                    .iter()
                    .find(|r| r.id().is_some() && r.id() == selected.id())
                    .cloned()
            })
            .collect();
    }

    fn notify_failure(&mut self, error: &Error, fallback: &str) {
        warn!(catalogue = K::PATH, error = %error, "Backend call failed");
        let detail = error.server_message().unwrap_or(fallback);
        self.notifier.notify(Severity::Error, titles::ERROR, detail);
    }
}
