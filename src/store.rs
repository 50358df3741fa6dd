//! File-backed ledger store.
//!
//! The ledger is one pretty-printed JSON document that is rewritten in full
//! on every save. Writes go to a sibling `.tmp` file first and are renamed
//! over the target, so a crash mid-write leaves the previous ledger intact.
//!
//! # Usage
//!
//! ```ignore
//! use pnl_ledger::PnlStore;
//!
//! let store = PnlStore::new("daily_pnl.json");
//! let mut doc = store.load();
//! doc.current_day = None;
//! store.save(&doc)?;
//! ```

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::error::StoreError;
use crate::record::LedgerDocument;

/// JSON ledger at a fixed path.
#[derive(Debug, Clone)]
pub struct PnlStore {
    path: PathBuf,
}

impl PnlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, falling back to an empty document.
    ///
    /// A missing file is the normal first-run case and is silent. A file that
    /// exists but cannot be read or parsed is logged and copied aside to
    /// `<path>.corrupt` before the empty document is returned.
    pub fn load(&self) -> LedgerDocument {
        match self.try_load() {
            Ok(doc) => doc,
            Err(e) => {
                error!("{e}; starting from an empty ledger");
                self.preserve_corrupt();
                LedgerDocument::default()
            }
        }
    }

    /// Load the ledger, reporting unreadable or unparsable files as errors.
    ///
    /// A missing file still yields an empty document.
    pub fn try_load(&self) -> Result<LedgerDocument, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no ledger at {}, starting empty", self.path.display());
                return Ok(LedgerDocument::default());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write the whole document as 2-space indented JSON.
    ///
    /// Documents holding a NaN or infinite amount are rejected before the
    /// file is touched.
    pub fn save(&self, doc: &LedgerDocument) -> Result<(), StoreError> {
        if let Some(field) = doc.non_finite_field() {
            error!("not saving ledger to {}: {field} is not finite", self.path.display());
            return Err(StoreError::NonFinite {
                path: self.path.clone(),
                field,
            });
        }
        let json = serde_json::to_string_pretty(doc)?;
        self.write_atomic(json.as_bytes()).map_err(|e| {
            error!("error saving ledger to {}: {e}", self.path.display());
            StoreError::Write {
                path: self.path.clone(),
                source: e,
            }
        })
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.sibling("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }

    fn preserve_corrupt(&self) {
        if !self.path.exists() {
            return;
        }
        let backup = self.sibling("corrupt");
        match fs::copy(&self.path, &backup) {
            Ok(_) => warn!("unreadable ledger preserved at {}", backup.display()),
            Err(e) => error!(
                "could not preserve unreadable ledger {}: {e}",
                self.path.display()
            ),
        }
    }

    /// `<path>.<suffix>`, keeping the original extension.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }
}
