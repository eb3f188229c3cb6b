//! JSON file store for the register
//!
//! The whole document is rewritten on every mutation. Writes go to a sibling
//! temp file which is then renamed over the target, so readers never observe
//! a half-written file.
//!
//! Loading is lossy by nature: a missing, unreadable, or corrupt file is
//! replaced by an empty document. [`LoadOutcome`] tells the caller which of
//! these happened so it can warn the user before the next save overwrites
//! whatever was on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::data;
use crate::error::{Result, StoreError};
use crate::model::{Document, Plan, Risk};

/// Why [`Store::load`] fell back to an empty document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryReason {
    /// No data file yet
    Missing,
    /// The file exists but could not be read
    Unreadable(String),
    /// The file was read but is not a valid document
    Malformed(String),
}

impl RecoveryReason {
    /// Whether existing data was discarded (anything but a fresh start)
    pub fn discards_data(&self) -> bool {
        !matches!(self, RecoveryReason::Missing)
    }
}

impl std::fmt::Display for RecoveryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveryReason::Missing => write!(f, "data file does not exist"),
            RecoveryReason::Unreadable(e) => write!(f, "data file could not be read: {}", e),
            RecoveryReason::Malformed(e) => write!(f, "data file is not a valid document: {}", e),
        }
    }
}

/// Result of [`Store::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file parsed cleanly
    Valid(Document),
    /// The empty default document was substituted
    RecoveredEmpty(RecoveryReason),
}

impl LoadOutcome {
    /// The loaded document, or an empty one after recovery
    pub fn into_document(self) -> Document {
        match self {
            LoadOutcome::Valid(doc) => doc,
            LoadOutcome::RecoveredEmpty(_) => Document::default(),
        }
    }

    /// Recovery reason, if the document was substituted
    pub fn recovery(&self) -> Option<&RecoveryReason> {
        match self {
            LoadOutcome::Valid(_) => None,
            LoadOutcome::RecoveredEmpty(reason) => Some(reason),
        }
    }
}

/// Persistence and mutation layer over one data file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store backed by the given file (not touched until used)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted document, recovering to empty on any failure
    pub fn load(&self) -> LoadOutcome {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {:?}, starting empty", self.path);
                return LoadOutcome::RecoveredEmpty(RecoveryReason::Missing);
            }
            Err(e) => {
                warn!("Failed to read {:?}, starting empty: {}", self.path, e);
                return LoadOutcome::RecoveredEmpty(RecoveryReason::Unreadable(e.to_string()));
            }
        };

        match serde_json::from_str::<Document>(&contents) {
            Ok(doc) => {
                debug!(
                    "Loaded {} risks and {} plans from {:?}",
                    doc.risks.len(),
                    doc.plans.len(),
                    self.path
                );
                LoadOutcome::Valid(doc)
            }
            Err(e) => {
                warn!("Discarding malformed data file {:?}: {}", self.path, e);
                LoadOutcome::RecoveredEmpty(RecoveryReason::Malformed(e.to_string()))
            }
        }
    }

    /// Overwrite the data file with the full document
    pub fn save(&self, doc: &Document) -> Result<()> {
        let contents = render(doc)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let temp_path = temp_path_for(&self.path);
        fs::write(&temp_path, contents).map_err(|e| StoreError::io(&temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io(&self.path, e));
        }

        debug!(
            "Saved {} risks and {} plans to {:?}",
            doc.risks.len(),
            doc.plans.len(),
            self.path
        );
        Ok(())
    }

    /// Append a risk and persist
    ///
    /// On a failed save the risk is removed again, leaving `doc` as it was.
    pub fn add_risk(
        &self,
        doc: &mut Document,
        name: &str,
        impact: &str,
        probability: &str,
    ) -> Result<()> {
        doc.risks.push(Risk::new(name, impact, probability));
        if let Err(e) = self.save(doc) {
            doc.risks.pop();
            return Err(e);
        }
        info!("Added risk {:?}", name);
        Ok(())
    }

    /// Append a plan and persist
    ///
    /// `risk_name` is not checked against the registered risks.
    pub fn add_plan(
        &self,
        doc: &mut Document,
        risk_name: &str,
        steps: &str,
        responsible: &str,
    ) -> Result<()> {
        doc.plans.push(Plan::new(risk_name, steps, responsible));
        if let Err(e) = self.save(doc) {
            doc.plans.pop();
            return Err(e);
        }
        info!("Added plan for risk {:?}", risk_name);
        Ok(())
    }
}

/// Sibling temp file: `bcp_data.json` -> `bcp_data.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Pretty JSON with a four-space indent; non-ASCII is written as UTF-8
fn render(doc: &Document) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(data::JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// A [`Store`] shared between threads
///
/// Every load-modify-save cycle runs under one lock so concurrent writers
/// cannot lose each other's updates. The lock is in-process only.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Load the current document under the lock
    pub fn snapshot(&self) -> LoadOutcome {
        self.inner.lock().load()
    }

    /// Reload, apply `f`, and return its result, all under the lock
    ///
    /// `f` receives the recovery reason when the file could not be loaded, so
    /// it can decide whether saving over discarded data is acceptable.
    pub fn update<T>(
        &self,
        f: impl FnOnce(&Store, &mut Document, Option<&RecoveryReason>) -> Result<T>,
    ) -> Result<T> {
        let store = self.inner.lock();
        let outcome = store.load();
        let recovery = outcome.recovery().cloned();
        if let Some(reason) = recovery.as_ref().filter(|r| r.discards_data()) {
            warn!("Updating {:?} over discarded data: {}", store.path(), reason);
        }
        let mut doc = outcome.into_document();
        f(&store, &mut doc, recovery.as_ref())
    }
}
