// src/record.rs
//! Credential record types shared by the store and the codecs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// One stored credential
///
/// Field order is the JSON export key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub website: String,
    pub username: String,
    pub password: String,
    pub notes: Option<String>,
}

impl Record {
    pub fn notes_or_empty(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// A record that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewRecord {
    pub website: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

impl NewRecord {
    pub fn new(
        website: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            website: website.into(),
            username: username.into(),
            password: password.into(),
            notes: notes.into(),
        }
    }

    /// Reject blank website/username/password, as interactive entry does
    pub fn validate(&self) -> Result<()> {
        require_non_blank(RecordField::Website, &self.website)?;
        require_non_blank(RecordField::Username, &self.username)?;
        require_non_blank(RecordField::Password, &self.password)
    }
}

/// One entry of a JSON/AES export as read back on import.
///
/// Every field is optional: missing or null values become empty strings and
/// `id` is ignored because the store assigns a fresh one.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImportedEntry {
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl From<ImportedEntry> for NewRecord {
    fn from(e: ImportedEntry) -> Self {
        Self {
            website: e.website.unwrap_or_default(),
            username: e.username.unwrap_or_default(),
            password: e.password.unwrap_or_default(),
            notes: e.notes.unwrap_or_default(),
        }
    }
}

/// Columns a partial update may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordField {
    Website,
    Username,
    Password,
    Notes,
}

impl RecordField {
    pub fn column(self) -> &'static str {
        match self {
            RecordField::Website => "website",
            RecordField::Username => "username",
            RecordField::Password => "password",
            RecordField::Notes => "notes",
        }
    }

    fn required(self) -> bool {
        !matches!(self, RecordField::Notes)
    }
}

fn require_non_blank(field: RecordField, value: &str) -> Result<()> {
    if field.required() && value.trim().is_empty() {
        return Err(VaultError::EmptyField(field.column()));
    }
    Ok(())
}

/// Partial update: field → new value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    fields: BTreeMap<RecordField, String>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: RecordField, value: impl Into<String>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn website(self, value: impl Into<String>) -> Self {
        self.set(RecordField::Website, value)
    }

    pub fn username(self, value: impl Into<String>) -> Self {
        self.set(RecordField::Username, value)
    }

    pub fn password(self, value: impl Into<String>) -> Self {
        self.set(RecordField::Password, value)
    }

    pub fn notes(self, value: impl Into<String>) -> Self {
        self.set(RecordField::Notes, value)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(|(f, v)| require_non_blank(f, v))
    }
}
