//! # jsonpool
//!
//! A lightweight embedded JSON document store: a single JSON file on disk
//! acts as a persistent mapping from string keys to arbitrary nested
//! values, mirrored by an in-memory pool.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jsonpool::{Database, Options};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open(Options::new("db"))?;
//!
//!     // Get/set without paths
//!     db.set("a", json!(3))?;
//!     assert_eq!(db.get("a")?, Some(json!(3)));
//!
//!     // Get/set with dotted paths
//!     db.set("a", json!({ "b": 4 }))?;
//!     assert_eq!(db.get_at("a", "b")?, Some(json!(4)));
//!     db.set_at("a", json!(5), "b")?;
//!     assert_eq!(db.get_at("a", "b")?, Some(json!(5)));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Deferred persistence
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use jsonpool::{Database, Options};
//!
//! // Batch writes and flush on a 2-second timer instead of per mutation
//! let db = Database::open(Options::new("db").with_defer(Duration::from_secs(2)))?;
//! # Ok::<(), jsonpool::Error>(())
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

pub mod logging;

// Re-export core types
pub use jsonpool_core::{Document, Error, Result};

// Store components
pub use jsonpool_store::{ChangeEvent, DocumentStore, ObserveHandle, StoreConfig};

/// Current version of jsonpool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options recognized when opening a [`Database`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Logical database name; resolved to `{base_dir}/{file}.json`
    pub file: String,
    /// Directory holding the database file, created when missing
    pub base_dir: PathBuf,
    /// Reserved: create backups of the backing file (unimplemented)
    pub backup: bool,
    /// Emit debug-level log output for store activity
    pub verbose: bool,
    /// Deferred-save interval; zero makes every mutation persist
    /// immediately
    pub defer: Duration,
    /// Indentation width for the serialized file (0 = compact)
    pub indent: usize,
}

impl Options {
    /// Options for a database named `file` with the defaults: base
    /// directory `./database`, verbose on, no deferral, compact output.
    pub fn new<S: Into<String>>(file: S) -> Self {
        Self {
            file: file.into(),
            base_dir: PathBuf::from("database"),
            backup: false,
            verbose: true,
            defer: Duration::ZERO,
            indent: 0,
        }
    }

    /// Set the directory holding the database file
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the deferred-save interval
    pub fn with_defer(mut self, defer: Duration) -> Self {
        self.defer = defer;
        self
    }

    /// Set the serialization indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable debug-level log output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Reserve backups of the backing file (currently unimplemented)
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }
}

/// The main database handle.
///
/// Bootstraps the database directory and wraps a [`DocumentStore`] bound
/// to `{base_dir}/{file}.json`. Thread-safe and cheap to clone; clones
/// share the same store.
#[derive(Clone)]
pub struct Database {
    store: DocumentStore,
}

impl Database {
    /// Opens a database, creating the base directory and backing file
    /// when missing.
    ///
    /// Fails with a fatal [`Error::Corrupt`] when the backing file exists
    /// but does not parse as a JSON object; the database must not operate
    /// over an unknown document state.
    pub fn open(options: Options) -> Result<Self> {
        std::fs::create_dir_all(&options.base_dir)?;
        let file = options.base_dir.join(format!("{}.json", options.file));

        if options.verbose {
            debug!(file = %file.display(), "opening database");
        }

        let store = DocumentStore::open(
            file,
            StoreConfig {
                defer: options.defer,
                indent: options.indent,
                backup: options.backup,
            },
        )?;
        Ok(Self { store })
    }

    /// The underlying document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// The backing file path.
    pub fn file(&self) -> &Path {
        self.store.file()
    }

    // =========================================================================
    // Delegated store surface
    // =========================================================================

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        self.store.get(key)
    }

    /// Gets the value at `key` + dotted `path`.
    pub fn get_at(&self, key: &str, path: &str) -> Result<Option<Value>> {
        self.store.get_at(key, path)
    }

    /// Sets `key` to `value`.
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        self.store.set(key, value)
    }

    /// Sets the value at `key` + dotted `path`, creating intermediates.
    pub fn set_at(&self, key: &str, value: Value, path: &str) -> Result<()> {
        self.store.set_at(key, value, path)
    }

    /// Removes the top-level `key`; returns whether it existed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.store.delete(key)
    }

    /// Sets `key` to `value` only if nothing is stored there yet.
    pub fn ensure(&self, key: &str, value: Value) -> Result<bool> {
        self.store.ensure(key, value)
    }

    /// Initialize-if-missing at `key` + `path`; returns whether it wrote.
    pub fn ensure_at(&self, key: &str, value: Value, path: &str) -> Result<bool> {
        self.store.ensure_at(key, value, path)
    }

    /// Whether `key` exists.
    pub fn has(&self, key: &str) -> Result<bool> {
        self.store.has(key)
    }

    /// Whether every segment of `key` + `path` exists.
    pub fn has_at(&self, key: &str, path: &str) -> Result<bool> {
        self.store.has_at(key, path)
    }

    /// First top-level value satisfying `predicate`, in iteration order.
    pub fn find<P: FnMut(&Value) -> bool>(&self, predicate: P) -> Result<Option<Value>> {
        self.store.find(predicate)
    }

    /// Every top-level value satisfying `predicate`.
    pub fn filter<P: FnMut(&Value) -> bool>(&self, predicate: P) -> Result<Vec<Value>> {
        self.store.filter(predicate)
    }

    /// Applies `f` to every top-level value in order, collecting results.
    pub fn for_each<T, F: FnMut(&Value) -> T>(&self, f: F) -> Result<Vec<T>> {
        self.store.for_each(f)
    }

    /// Top-level keys in iteration order.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.store.keys()
    }

    /// Top-level values in iteration order.
    pub fn values(&self) -> Result<Vec<Value>> {
        self.store.values()
    }

    /// Top-level key/value pairs in iteration order.
    pub fn entries(&self) -> Result<Vec<(String, Value)>> {
        self.store.entries()
    }

    /// Replaces the document with an empty one.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    /// Replaces the document wholesale.
    pub fn import(&self, document: Document) -> Result<()> {
        self.store.import(document)
    }

    /// Returns a snapshot of the whole document.
    pub fn export(&self) -> Result<Document> {
        self.store.export()
    }

    /// Observable handle onto the mapping under `key`.
    pub fn observe(&self, key: &str) -> Result<ObserveHandle> {
        self.store.observe(key)
    }

    /// Observable handle onto the mapping at `key` + `path`.
    pub fn observe_at(&self, key: &str, path: &str) -> Result<ObserveHandle> {
        self.store.observe_at(key, path)
    }

    /// Puts the database into read-only mode.
    pub fn lock(&self) {
        self.store.lock()
    }

    /// Leaves read-only mode.
    pub fn unlock(&self) {
        self.store.unlock()
    }

    /// Whether the database is in read-only mode.
    pub fn is_locked(&self) -> bool {
        self.store.is_locked()
    }

    /// Forces a save to the backing file now.
    pub fn flush(&self) -> Result<()> {
        self.store.flush()
    }

    /// Stops the deferred flusher and flushes pending changes.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_option_defaults() {
        let options = Options::new("db");
        assert_eq!(options.file, "db");
        assert_eq!(options.base_dir, PathBuf::from("database"));
        assert!(!options.backup);
        assert!(options.verbose);
        assert_eq!(options.defer, Duration::ZERO);
        assert_eq!(options.indent, 0);
    }

    #[test]
    fn test_option_builders() {
        let options = Options::new("db")
            .with_base_dir("/tmp/data")
            .with_defer(Duration::from_secs(1))
            .with_indent(4)
            .with_verbose(false);
        assert_eq!(options.base_dir, PathBuf::from("/tmp/data"));
        assert_eq!(options.defer, Duration::from_secs(1));
        assert_eq!(options.indent, 4);
        assert!(!options.verbose);
    }

    #[test]
    fn test_open_bootstraps_directory_and_file() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("database");

        let db = Database::open(Options::new("db").with_base_dir(&base)).unwrap();

        assert!(base.exists());
        assert_eq!(db.file(), base.join("db.json"));
        assert_eq!(std::fs::read_to_string(db.file()).unwrap(), "{}");
    }

    #[test]
    fn test_basic_operations() {
        let dir = tempdir().unwrap();
        let db = Database::open(Options::new("db").with_base_dir(dir.path())).unwrap();

        db.set("a", json!(3)).unwrap();
        assert_eq!(db.get("a").unwrap(), Some(json!(3)));

        db.set_at("a", json!(5), "b.c").unwrap();
        assert_eq!(db.get("a").unwrap(), Some(json!({ "b": { "c": 5 } })));

        assert!(db.delete("a").unwrap());
        assert_eq!(db.get("a").unwrap(), None);
    }

    #[test]
    fn test_persistence_across_reopens() {
        let dir = tempdir().unwrap();

        {
            let db = Database::open(Options::new("db").with_base_dir(dir.path())).unwrap();
            db.set("kept", json!({ "across": "reopens" })).unwrap();
        }

        let db = Database::open(Options::new("db").with_base_dir(dir.path())).unwrap();
        assert_eq!(
            db.get_at("kept", "across").unwrap(),
            Some(json!("reopens"))
        );
    }

    #[test]
    fn test_lock_round_trip() {
        let dir = tempdir().unwrap();
        let db = Database::open(Options::new("db").with_base_dir(dir.path())).unwrap();

        db.lock();
        assert!(db.set("a", json!(1)).is_err());
        db.unlock();
        db.set("a", json!(1)).unwrap();
    }
}
