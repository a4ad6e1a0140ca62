//! Saved-password vault backed by a single key-value slot.
//!
//! The persisted value is a JSON array of `{ "label": .., "pwd": .. }`
//! objects, newest first. No version field; absent or malformed content
//! always reads as an empty list.

mod backend;

pub use backend::{FileSlot, Slot};

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

/// One labeled password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub label: String,
    #[serde(rename = "pwd")]
    pub password: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("enter a label for the password (e.g. Gmail, Twitter)")]
    EmptyLabel,
    #[error("generate a valid password first")]
    NoPassword,
    #[error("vault storage error: {0}")]
    Io(#[from] io::Error),
    #[error("vault serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered list of saved entries, persisted whole after every mutation.
pub struct Vault<S: Slot> {
    slot: S,
    entries: Vec<SavedEntry>,
}

impl<S: Slot> Vault<S> {
    /// Load the saved list from the slot. Absent or unparseable content is
    /// an empty list, never an error.
    pub fn open(slot: S) -> Self {
        let entries = slot
            .read()
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { slot, entries }
    }

    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `{label, password}` at the front and persist the full list.
    /// The label is trimmed; a blank label or empty password is rejected
    /// before anything is touched.
    pub fn save(&mut self, label: &str, password: &str) -> Result<(), StoreError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(StoreError::EmptyLabel);
        }
        if password.is_empty() {
            return Err(StoreError::NoPassword);
        }

        self.entries.insert(
            0,
            SavedEntry {
                label: label.to_string(),
                password: password.to_string(),
            },
        );
        self.persist()
    }

    /// Remove the entry at `index` (0-based) and persist. Out of range is a
    /// no-op; the return value says whether anything was removed.
    pub fn delete_at(&mut self, index: usize) -> Result<bool, StoreError> {
        if index >= self.entries.len() {
            return Ok(false);
        }
        let mut removed = self.entries.remove(index);
        removed.label.zeroize();
        removed.password.zeroize();
        self.persist()?;
        Ok(true)
    }

    /// Empty the vault and remove the slot key. `confirm` is the caller's
    /// yes/no gate; declining leaves both the list and the slot untouched.
    pub fn clear<F: FnOnce() -> bool>(&mut self, confirm: F) -> Result<bool, StoreError> {
        if !confirm() {
            return Ok(false);
        }
        self.wipe_entries();
        self.slot.remove()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.slot.write(&raw)?;
        Ok(())
    }

    fn wipe_entries(&mut self) {
        for entry in &mut self.entries {
            entry.label.zeroize();
            entry.password.zeroize();
        }
        self.entries.clear();
    }
}

impl<S: Slot> Drop for Vault<S> {
    fn drop(&mut self) {
        self.wipe_entries();
    }
}
