//! Référentiel Core Library
//!
//! This crate provides the core functionality for Référentiel, including:
//! - Reference catalogues (compétences, compétences poste)
//! - HTTP gateways to the REST backend
//! - List controllers (reload, add, edit, delete, filter, selection)
//! - Form validation and name uniqueness checks
//! - CSV export
//! - Notification interface for front ends

pub mod catalogue;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod gateway;
pub mod notify;

#[cfg(test)]
mod error_tests;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalogue::{Catalogue, JobSkill, JobSkills, Record, Skill, Skills};
    pub use crate::config::Config;
    pub use crate::controller::{JobSkillListController, ListController, Outcome, SkillListController};
    pub use crate::error::{Error, Result};
    pub use crate::export::CsvExport;
    pub use crate::gateway::{HttpGateway, RecordGateway};
    pub use crate::notify::{Notifier, Severity};
}
