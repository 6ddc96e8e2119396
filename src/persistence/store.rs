//! Key-Value-Speicher für persistente Layout-Daten.

use anyhow::Context;
use std::collections::HashMap;
use std::path::PathBuf;

/// Minimaler String-Key-Value-Speicher (analog zum Browser-Local-Storage).
pub trait KeyValueStore {
    /// Liest den Wert zu `key`. Nicht vorhanden oder unlesbar → `None`.
    fn get(&self, key: &str) -> Option<String>;
    /// Schreibt `value` unter `key`.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    /// Entfernt `key`. Nicht vorhandene Keys sind kein Fehler.
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

/// Flüchtiger Speicher im Arbeitsspeicher (Tests, Sitzungen ohne Persistenz)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Speicher mit vorbelegten Einträgen.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Dateibasierter Speicher: eine Datei pro Key in einem Verzeichnis
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Erstellt einen Speicher im Verzeichnis `dir` (wird beim ersten Schreiben angelegt).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Verzeichnis des Speichers.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys sind feste Bezeichner, Pfadtrenner trotzdem neutralisieren
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(file_name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Store-Eintrag '{}' nicht lesbar: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Store-Verzeichnis {} anlegen", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Store-Eintrag {} schreiben", path.display()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Store-Eintrag {} löschen", path.display())),
        }
    }
}
