//! Resume document model — structured content produced by the form wizard.
#![allow(dead_code)]
//!
//! The engine treats a `Document` as read-mostly: section entries and free-text
//! fields are owned by the wizard, and only decoration geometry is mutated here
//! (through the interaction controller). Pagination derives a `PageLayout` from
//! a snapshot of this model on every call and never stores it back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::decoration::Decoration;

// ────────────────────────────────────────────────────────────────────────────
// Template selector
// ────────────────────────────────────────────────────────────────────────────

/// The two supported resume templates.
///
/// The template changes pagination behavior for certificates and links:
/// `Classic` renders them in the main column (so they overflow to page 2),
/// `Modern` keeps them in a sidebar that always stays on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Classic,
    Modern,
}

impl Default for Template {
    fn default() -> Self {
        Template::Classic
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: Uuid,
    pub name: String,
    /// 1–5 proficiency shown as a bar in both templates.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateEntry {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub id: Uuid,
    pub label: String,
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The whole resume: personal info, section entry collections, template
/// selection, and free-floating decorations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub certificates: Vec<CertificateEntry>,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}

impl Document {
    /// Finds a decoration by id.
    pub fn decoration(&self, id: Uuid) -> Option<&Decoration> {
        self.decorations.iter().find(|d| d.id == id)
    }

    /// Finds a decoration by id, mutably. Returns `None` for a since-deleted
    /// decoration — gesture callers treat that as a no-op.
    pub fn decoration_mut(&mut self, id: Uuid) -> Option<&mut Decoration> {
        self.decorations.iter_mut().find(|d| d.id == id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
