//! Storage slot backends.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A single named slot of durable key-value storage.
///
/// The vault is written whole on every mutation, so the interface is just
/// read-all / write-all / remove.
pub trait Slot {
    /// Raw slot contents, `None` if the slot has never been written.
    fn read(&self) -> io::Result<Option<String>>;

    fn write(&mut self, data: &str) -> io::Result<()>;

    /// Remove the slot entirely. Removing an absent slot is fine.
    fn remove(&mut self) -> io::Result<()>;
}

/// Slot backed by one file under the user's config directory.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default vault location: `$HOME/.config/passkeep/vault.json`.
    pub fn at_default() -> Self {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        Self::new(PathBuf::from(format!("{}/.config/passkeep/vault.json", home)))
    }
}

impl Slot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, data: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)
    }

    fn remove(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("vault.json"));
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn write_creates_parent_dirs_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nested/deep/vault.json"));
        slot.write(r#"[{"label":"a","pwd":"1"}]"#).unwrap();
        assert_eq!(
            slot.read().unwrap().as_deref(),
            Some(r#"[{"label":"a","pwd":"1"}]"#)
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("vault.json"));
        slot.write("[]").unwrap();
        slot.remove().unwrap();
        slot.remove().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }
}
