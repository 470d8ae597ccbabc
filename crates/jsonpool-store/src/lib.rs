//! # jsonpool Store Engine
//!
//! The pool: an in-memory JSON document mirroring a single backing file,
//! with dotted-path addressing, deferred or immediate persistence, and a
//! read-only lock mode.
//!
//! ## Architecture
//!
//! ```text
//! Callers → DocumentStore (RwLock'd document) → save scheduling → file
//!                  ↑                                  ↓
//!           deferred flusher thread          temp file + rename
//! ```
//!
//! Persistence is serialized: at most one file write is in flight per
//! store, guarded by the pending-save counter. A save requested while one
//! is in flight is rescheduled after a fixed backoff, never run
//! concurrently and never dropped.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Condvar, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use std::thread::JoinHandle;
use std::time::Duration;

use jsonpool_core::{document, path as json_path};
use serde_json::Value;
use tracing::{debug, warn};

pub mod observe;

pub use jsonpool_core::{Document, Error, Result};
pub use observe::{ChangeEvent, ObserveHandle};

/// Backoff before retrying a save that found another write in flight.
const SAVE_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Document store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Deferred-save interval. Zero disables deferral: every mutation
    /// triggers an immediate save attempt.
    pub defer: Duration,
    /// Indentation width for the serialized file (0 = compact)
    pub indent: usize,
    /// Reserved: create backups of the backing file (unimplemented)
    pub backup: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            defer: Duration::ZERO,
            indent: 0,
            backup: false,
        }
    }
}

/// The document store ("the pool").
///
/// Owns the in-memory document, the backing file path, and the
/// synchronization state. Thread-safe and cheap to clone; clones share
/// the same underlying store.
///
/// # Examples
///
/// ```rust,no_run
/// use jsonpool_store::{DocumentStore, StoreConfig};
/// use serde_json::json;
///
/// let store = DocumentStore::open("database/db.json", StoreConfig::default())?;
/// store.set_at("a", json!(5), "b.c")?;
/// assert_eq!(store.get("a")?, Some(json!({ "b": { "c": 5 } })));
/// # Ok::<(), jsonpool_core::Error>(())
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<StoreInner>,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("file", &self.inner.file)
            .field("locked", &self.is_locked())
            .finish_non_exhaustive()
    }
}

/// Wakes or stops the deferred flusher thread.
struct FlushSignal {
    stopped: Mutex<bool>,
    cv: Condvar,
}

pub(crate) struct StoreInner {
    /// The backing file
    file: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// The in-memory document
    document: RwLock<Document>,
    /// Number of persistence operations in flight (0 or 1)
    pending_saves: AtomicU32,
    /// Whether the document has unsaved mutations (deferred mode)
    modified: AtomicBool,
    /// Read-only mode flag
    locked: AtomicBool,
    /// Flusher shutdown signal
    signal: FlushSignal,
    /// Deferred flusher thread, joined on close
    flusher: Mutex<Option<JoinHandle<()>>>,
    /// Self-reference for rescheduling saves off-thread
    self_ref: Weak<StoreInner>,
}

impl DocumentStore {
    /// Opens or creates a document store backed by `file`.
    ///
    /// A missing or empty file is initialized to an empty document. An
    /// existing file that does not parse as a JSON object is a fatal
    /// `Error::Corrupt`: the store refuses to construct over an unknown
    /// document state.
    ///
    /// With a nonzero `defer` interval a background flusher is started
    /// that persists the document on each tick where the modified flag is
    /// set. The flusher holds no strong reference to the store and shuts
    /// down when the store is dropped or closed.
    pub fn open(file: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        let file = file.as_ref().to_path_buf();
        let doc = Self::load_or_init(&file)?;

        let inner = Arc::new_cyclic(|weak| StoreInner {
            file,
            config,
            document: RwLock::new(doc),
            pending_saves: AtomicU32::new(0),
            modified: AtomicBool::new(false),
            locked: AtomicBool::new(false),
            signal: FlushSignal {
                stopped: Mutex::new(false),
                cv: Condvar::new(),
            },
            flusher: Mutex::new(None),
            self_ref: weak.clone(),
        });

        debug!(file = %inner.file.display(), "initialized pool");

        let store = Self { inner };
        if !store.inner.config.defer.is_zero() {
            store.inner.spawn_flusher();
        }
        Ok(store)
    }

    /// Reads the backing file, creating it with an empty document when
    /// missing or empty.
    fn load_or_init(file: &Path) -> Result<Document> {
        if file.exists() {
            let bytes = std::fs::read(file)?;
            if !bytes.is_empty() {
                return document::from_json_bytes(&bytes);
            }
        }
        std::fs::write(file, b"{}")?;
        Ok(Document::new())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Gets the value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        self.get_at(key, "")
    }

    /// Gets the value at `key` + dotted `path`.
    ///
    /// Returns `None` the moment any segment is missing, without mutating
    /// the document. Present-but-falsy values (`0`, `""`, `false`,
    /// `null`) are values, not absences.
    pub fn get_at(&self, key: &str, path: &str) -> Result<Option<Value>> {
        let doc = self.inner.read_doc()?;
        Ok(doc.get(key).and_then(|v| json_path::get(v, path)).cloned())
    }

    /// Whether `key` exists at the top level.
    pub fn has(&self, key: &str) -> Result<bool> {
        self.has_at(key, "")
    }

    /// Whether every segment of `key` + `path` exists (presence, not
    /// truthiness).
    pub fn has_at(&self, key: &str, path: &str) -> Result<bool> {
        let doc = self.inner.read_doc()?;
        Ok(doc
            .get(key)
            .map(|v| json_path::contains(v, path))
            .unwrap_or(false))
    }

    /// Returns the first top-level value satisfying `predicate`, in
    /// iteration order.
    pub fn find<P>(&self, predicate: P) -> Result<Option<Value>>
    where
        P: FnMut(&Value) -> bool,
    {
        let mut predicate = predicate;
        let doc = self.inner.read_doc()?;
        Ok(doc.values().find(|v| predicate(v)).cloned())
    }

    /// Returns every top-level value satisfying `predicate`, in iteration
    /// order.
    pub fn filter<P>(&self, predicate: P) -> Result<Vec<Value>>
    where
        P: FnMut(&Value) -> bool,
    {
        let mut predicate = predicate;
        let doc = self.inner.read_doc()?;
        Ok(doc.values().filter(|v| predicate(v)).cloned().collect())
    }

    /// Applies `f` to every top-level value in iteration order and
    /// collects the results. Always visits every value.
    pub fn for_each<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&Value) -> T,
    {
        let doc = self.inner.read_doc()?;
        Ok(doc.values().map(|v| f(v)).collect())
    }

    /// Top-level keys in iteration order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let doc = self.inner.read_doc()?;
        Ok(doc.keys().cloned().collect())
    }

    /// Top-level values in iteration order.
    pub fn values(&self) -> Result<Vec<Value>> {
        let doc = self.inner.read_doc()?;
        Ok(doc.values().cloned().collect())
    }

    /// Top-level key/value pairs in iteration order.
    pub fn entries(&self) -> Result<Vec<(String, Value)>> {
        let doc = self.inner.read_doc()?;
        Ok(doc.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    /// Returns a snapshot of the whole document.
    pub fn export(&self) -> Result<Document> {
        let doc = self.inner.read_doc()?;
        Ok(doc.clone())
    }

    /// Number of top-level keys.
    pub fn len(&self) -> Result<usize> {
        let doc = self.inner.read_doc()?;
        Ok(doc.len())
    }

    /// Whether the document has no top-level keys.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Sets `key` to `value`.
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        self.set_at(key, value, "")
    }

    /// Sets the value at `key` + dotted `path`, creating the top-level
    /// key and any missing intermediate mappings.
    ///
    /// Rejected with `Error::Locked` while the store is locked; the
    /// document is left untouched.
    pub fn set_at(&self, key: &str, value: Value, path: &str) -> Result<()> {
        self.inner.check_unlocked("set")?;
        {
            let mut doc = self.inner.write_doc()?;
            let root = doc.entry(key).or_insert(Value::Null);
            *json_path::entry(root, path) = value;
        }
        self.inner.schedule_save()
    }

    /// Removes the top-level `key` wholesale. Returns whether it existed;
    /// removing an absent key is a no-op that schedules nothing.
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.inner.check_unlocked("delete")?;
        let existed = {
            let mut doc = self.inner.write_doc()?;
            doc.remove(key).is_some()
        };
        if existed {
            self.inner.schedule_save()?;
        }
        Ok(existed)
    }

    /// Sets `key` to `value` only if nothing is stored there yet.
    pub fn ensure(&self, key: &str, value: Value) -> Result<bool> {
        self.ensure_at(key, value, "")
    }

    /// Like [`set_at`](Self::set_at), but assigns only when the terminal
    /// slot is absent or `null`. Intermediate mappings are still
    /// auto-created. Returns whether it wrote.
    pub fn ensure_at(&self, key: &str, value: Value, path: &str) -> Result<bool> {
        self.inner.check_unlocked("ensure")?;
        let wrote = {
            let mut doc = self.inner.write_doc()?;
            let root = doc.entry(key).or_insert(Value::Null);
            let slot = json_path::entry(root, path);
            if slot.is_null() {
                *slot = value;
                true
            } else {
                false
            }
        };
        if wrote {
            self.inner.schedule_save()?;
        }
        Ok(wrote)
    }

    /// Replaces the document with an empty one.
    pub fn clear(&self) -> Result<()> {
        self.inner.check_unlocked("clear")?;
        {
            let mut doc = self.inner.write_doc()?;
            doc.clear();
        }
        self.inner.schedule_save()
    }

    /// Replaces the document wholesale with `document`.
    pub fn import(&self, document: Document) -> Result<()> {
        self.inner.check_unlocked("import")?;
        {
            let mut doc = self.inner.write_doc()?;
            *doc = document;
        }
        self.inner.schedule_save()
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns a handle onto the mapping stored under `key`.
    pub fn observe(&self, key: &str) -> Result<ObserveHandle> {
        self.observe_at(key, "")
    }

    /// Resolves (creating if needed) the mapping at `key` + `path` and
    /// returns a handle through which field assignments are intercepted:
    /// a changed value emits a [`ChangeEvent`] to subscribers before the
    /// assignment is applied. Mutations made outside the handle are not
    /// observed. Rejected while locked.
    pub fn observe_at(&self, key: &str, path: &str) -> Result<ObserveHandle> {
        self.inner.check_unlocked("observe")?;
        let created = {
            let mut doc = self.inner.write_doc()?;
            let already = doc
                .get(key)
                .and_then(|v| json_path::get(v, path))
                .map(Value::is_object)
                .unwrap_or(false);
            if !already {
                let root = doc.entry(key).or_insert(Value::Null);
                let slot = json_path::entry(root, path);
                *slot = Value::Object(Document::new());
            }
            !already
        };
        if created {
            self.inner.schedule_save()?;
        }
        Ok(ObserveHandle::new(
            Arc::clone(&self.inner),
            key.to_string(),
            path.to_string(),
        ))
    }

    // =========================================================================
    // Lock mode
    // =========================================================================

    /// Puts the store into read-only mode: all subsequent mutations are
    /// rejected until [`unlock`](Self::unlock).
    pub fn lock(&self) {
        self.inner.locked.store(true, Ordering::SeqCst);
        debug!(file = %self.inner.file.display(), "store locked");
    }

    /// Leaves read-only mode.
    pub fn unlock(&self) {
        self.inner.locked.store(false, Ordering::SeqCst);
        debug!(file = %self.inner.file.display(), "store unlocked");
    }

    /// Whether the store is in read-only mode.
    pub fn is_locked(&self) -> bool {
        self.inner.locked.load(Ordering::SeqCst)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Forces a save of the document to the backing file now.
    pub fn flush(&self) -> Result<()> {
        self.inner.save()
    }

    /// Stops the deferred flusher and performs a final flush when there
    /// are unsaved mutations.
    pub fn close(self) -> Result<()> {
        self.inner.shutdown()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The backing file path.
    pub fn file(&self) -> &Path {
        &self.inner.file
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }
}

impl StoreInner {
    fn read_doc(&self) -> Result<RwLockReadGuard<'_, Document>> {
        self.document.read().map_err(|_| Error::LockPoisoned)
    }

    fn write_doc(&self) -> Result<RwLockWriteGuard<'_, Document>> {
        self.document.write().map_err(|_| Error::LockPoisoned)
    }

    pub(crate) fn check_unlocked(&self, operation: &str) -> Result<()> {
        if self.locked.load(Ordering::SeqCst) {
            warn!(
                operation,
                file = %self.file.display(),
                "mutation rejected: store is locked"
            );
            return Err(Error::Locked);
        }
        Ok(())
    }

    /// Applies the save policy after a mutation: mark modified under
    /// deferral, save immediately otherwise.
    pub(crate) fn schedule_save(&self) -> Result<()> {
        if self.config.defer.is_zero() {
            self.save()
        } else {
            self.modified.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Persists the document, serializing writes: one in flight at a
    /// time, later requests deferred (fixed backoff), never dropped.
    pub(crate) fn save(&self) -> Result<()> {
        if self.locked.load(Ordering::SeqCst) {
            // Saving a locked store is a configuration error: stop
            // auto-persisting, keep serving reads.
            warn!(
                file = %self.file.display(),
                "save requested while locked; disabling deferred auto-save"
            );
            self.signal_stop();
            return Err(Error::Locked);
        }

        if self
            .pending_saves
            .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            // Another write is in flight against the same file; retry
            // after the backoff instead of writing concurrently.
            self.modified.store(true, Ordering::SeqCst);
            let weak = self.self_ref.clone();
            std::thread::spawn(move || {
                std::thread::sleep(SAVE_RETRY_DELAY);
                if let Some(inner) = weak.upgrade() {
                    // save() logs its own failures
                    let _ = inner.save();
                }
            });
            return Ok(());
        }

        // Cleared before the snapshot: a mutation landing while the
        // write is in flight re-marks it, so the next tick or close
        // persists it instead of seeing a falsely clean flag.
        self.modified.store(false, Ordering::SeqCst);
        let result = self.write_to_disk();
        self.pending_saves.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(()) => {
                debug!(file = %self.file.display(), "database saved");
                Ok(())
            }
            Err(e) => {
                // The in-memory document stays authoritative; the next
                // mutation or flusher tick retries.
                self.modified.store(true, Ordering::SeqCst);
                warn!(
                    file = %self.file.display(),
                    error = %e,
                    "failed to save database"
                );
                Err(e)
            }
        }
    }

    /// Serializes the full document and writes it atomically: temp file
    /// in the same directory, then rename over the backing file.
    fn write_to_disk(&self) -> Result<()> {
        let bytes = {
            let doc = self.read_doc()?;
            document::to_json_bytes(&doc, self.config.indent)?
        };
        let tmp = self.file.with_extension("json.tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, &self.file)?;
        Ok(())
    }

    /// Starts the deferred flusher. The thread holds only a weak
    /// reference so a dropped store tears it down.
    fn spawn_flusher(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let interval = self.config.defer;

        let handle = std::thread::Builder::new()
            .name("jsonpool-flush".to_string())
            .spawn(move || loop {
                let stopped = {
                    let Some(inner) = weak.upgrade() else { return };
                    let guard = inner
                        .signal
                        .stopped
                        .lock()
                        .unwrap_or_else(|e| e.into_inner());
                    let (guard, _) = match inner.signal.cv.wait_timeout(guard, interval) {
                        Ok(r) => r,
                        Err(_) => return,
                    };
                    *guard
                };
                if stopped {
                    return;
                }
                let Some(inner) = weak.upgrade() else { return };
                if inner.modified.load(Ordering::SeqCst) {
                    // save() logs failures and leaves the modified flag
                    // set so the next tick retries
                    let _ = inner.save();
                }
            });

        match handle {
            Ok(handle) => {
                let mut slot = self.flusher.lock().unwrap_or_else(|e| e.into_inner());
                *slot = Some(handle);
            }
            Err(e) => warn!(error = %e, "failed to start deferred flusher"),
        }
    }

    fn signal_stop(&self) {
        let mut stopped = self
            .signal
            .stopped
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        *stopped = true;
        self.signal.cv.notify_all();
    }

    fn shutdown(&self) -> Result<()> {
        self.signal_stop();
        let handle = {
            let mut slot = self.flusher.lock().unwrap_or_else(|e| e.into_inner());
            slot.take()
        };
        if let Some(handle) = handle {
            let _ = handle.join();
        }
        if self.modified.load(Ordering::SeqCst) {
            match self.save() {
                // A locked store does not persist; that is the policy,
                // not a close failure.
                Err(Error::Locked) => Ok(()),
                other => other,
            }
        } else {
            Ok(())
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        // The flusher only holds a weak reference; signalling here just
        // wakes it so it exits without waiting out a full interval.
        self.signal_stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup() -> (TempDir, DocumentStore) {
        let dir = TempDir::new().unwrap();
        let store =
            DocumentStore::open(dir.path().join("db.json"), StoreConfig::default()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_get_round_trip() {
        let (_dir, store) = setup();

        store.set("a", json!(3)).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!(3)));

        store.set("a", json!({ "b": 4 })).unwrap();
        assert_eq!(store.get_at("a", "b").unwrap(), Some(json!(4)));

        store.set_at("a", json!(5), "b").unwrap();
        assert_eq!(store.get_at("a", "b").unwrap(), Some(json!(5)));
    }

    #[test]
    fn test_set_creates_intermediate_mappings() {
        let (_dir, store) = setup();

        store.set_at("a", json!(5), "b.c").unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!({ "b": { "c": 5 } })));
    }

    #[test]
    fn test_get_missing_path_is_absent_and_does_not_mutate() {
        let (_dir, store) = setup();

        store.set("a", json!({ "b": 1 })).unwrap();
        let before = store.export().unwrap();

        assert_eq!(store.get_at("a", "x.y.z").unwrap(), None);
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.export().unwrap(), before);
    }

    #[test]
    fn test_falsy_values_are_present() {
        let (_dir, store) = setup();

        store.set("zero", json!(0)).unwrap();
        store.set("empty", json!("")).unwrap();
        store.set("no", json!(false)).unwrap();

        assert_eq!(store.get("zero").unwrap(), Some(json!(0)));
        assert_eq!(store.get("empty").unwrap(), Some(json!("")));
        assert_eq!(store.get("no").unwrap(), Some(json!(false)));
        assert!(store.has("zero").unwrap());
        assert!(store.has("no").unwrap());
    }

    #[test]
    fn test_has_checks_presence_along_path() {
        let (_dir, store) = setup();

        store.set_at("a", json!(null), "b.c").unwrap();
        assert!(store.has_at("a", "b").unwrap());
        assert!(store.has_at("a", "b.c").unwrap());
        assert!(!store.has_at("a", "b.d").unwrap());
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let (_dir, store) = setup();

        assert!(store.ensure_at("a", json!(1), "b").unwrap());
        assert!(!store.ensure_at("a", json!(2), "b").unwrap());
        assert_eq!(store.get_at("a", "b").unwrap(), Some(json!(1)));
    }

    #[test]
    fn test_ensure_overwrites_null_placeholder() {
        let (_dir, store) = setup();

        store.set("a", json!({ "b": null })).unwrap();
        assert!(store.ensure_at("a", json!(1), "b").unwrap());
        assert_eq!(store.get_at("a", "b").unwrap(), Some(json!(1)));
    }

    #[test]
    fn test_delete_removes_whole_key() {
        let (_dir, store) = setup();

        store.set_at("a", json!(1), "deep.path.inside").unwrap();
        assert!(store.delete("a").unwrap());
        assert_eq!(store.get("a").unwrap(), None);
        assert!(!store.delete("a").unwrap());
    }

    #[test]
    fn test_lock_rejects_mutations_and_preserves_document() {
        let (_dir, store) = setup();

        store.set("a", json!({ "b": 1 })).unwrap();
        let before = store.export().unwrap();

        store.lock();
        assert!(store.is_locked());
        assert!(matches!(store.set("a", json!(2)), Err(Error::Locked)));
        assert!(matches!(store.delete("a"), Err(Error::Locked)));
        assert!(matches!(store.clear(), Err(Error::Locked)));
        assert!(matches!(
            store.ensure("x", json!(1)),
            Err(Error::Locked)
        ));
        assert!(matches!(
            store.import(Document::new()),
            Err(Error::Locked)
        ));
        assert!(matches!(store.observe("a"), Err(Error::Locked)));
        assert_eq!(store.export().unwrap(), before);

        // Reads stay permitted
        assert_eq!(store.get_at("a", "b").unwrap(), Some(json!(1)));
        assert_eq!(store.keys().unwrap(), vec!["a".to_string()]);

        store.unlock();
        store.set("a", json!(2)).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_find_returns_first_match_in_order() {
        let (_dir, store) = setup();

        store.set("first", json!({ "score": 10 })).unwrap();
        store.set("second", json!({ "score": 20 })).unwrap();
        store.set("third", json!({ "score": 20 })).unwrap();

        let hit = store
            .find(|v| v.get("score") == Some(&json!(20)))
            .unwrap();
        assert_eq!(hit, Some(json!({ "score": 20 })));

        let all = store
            .filter(|v| v.get("score") == Some(&json!(20)))
            .unwrap();
        assert_eq!(all.len(), 2);

        assert_eq!(store.find(|v| v == &json!(42)).unwrap(), None);
    }

    #[test]
    fn test_for_each_visits_everything_in_order() {
        let (_dir, store) = setup();

        store.set("b", json!(1)).unwrap();
        store.set("a", json!(2)).unwrap();
        store.set("c", json!(3)).unwrap();

        let doubled = store
            .for_each(|v| v.as_i64().unwrap_or(0) * 2)
            .unwrap();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let (_dir, store) = setup();

        store.set("b", json!(1)).unwrap();
        store.set("a", json!(2)).unwrap();

        assert_eq!(store.keys().unwrap(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(store.values().unwrap(), vec![json!(1), json!(2)]);
        assert_eq!(
            store.entries().unwrap(),
            vec![("b".to_string(), json!(1)), ("a".to_string(), json!(2))]
        );
    }

    #[test]
    fn test_clear_and_import() {
        let (_dir, store) = setup();

        store.set("a", json!(1)).unwrap();
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());

        let mut doc = Document::new();
        doc.insert("x".to_string(), json!(true));
        store.import(doc.clone()).unwrap();
        assert_eq!(store.export().unwrap(), doc);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_export_is_a_snapshot() {
        let (_dir, store) = setup();

        store.set("a", json!(1)).unwrap();
        let mut snapshot = store.export().unwrap();
        snapshot.insert("b".to_string(), json!(2));

        assert_eq!(store.get("b").unwrap(), None);
    }

    #[test]
    fn test_debug_output_names_backing_file() {
        let (_dir, store) = setup();
        let rendered = format!("{:?}", store);
        assert!(rendered.contains("DocumentStore"));
        assert!(rendered.contains("db.json"));
    }

    #[test]
    fn test_accessors() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("db.json");
        let config = StoreConfig {
            indent: 2,
            ..Default::default()
        };
        let store = DocumentStore::open(&file, config).unwrap();

        assert_eq!(store.file(), file.as_path());
        assert_eq!(store.config().indent, 2);
        assert!(!store.is_locked());
    }
}
