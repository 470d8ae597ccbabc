//! Observable references onto nested mappings.
//!
//! An [`ObserveHandle`] is bound to a (store, key, path) triple. Field
//! assignments made through the handle are intercepted: when the new
//! value differs from the old one, a [`ChangeEvent`] is emitted to every
//! subscriber and then the assignment is applied in place. Mutations made
//! directly on the document bypass the handle and emit nothing.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

use jsonpool_core::{path as json_path, Document, Result};
use serde_json::Value;

use crate::StoreInner;

/// A change observed through an [`ObserveHandle`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// The field that was reassigned within the observed mapping
    pub field: String,
    /// The new value
    pub value: Value,
}

/// A handle onto the mapping at a store's `key` + `path`.
///
/// Created by [`DocumentStore::observe_at`](crate::DocumentStore::observe_at).
pub struct ObserveHandle {
    inner: Arc<StoreInner>,
    key: String,
    path: String,
    subscribers: Mutex<Vec<Sender<ChangeEvent>>>,
}

impl ObserveHandle {
    pub(crate) fn new(inner: Arc<StoreInner>, key: String, path: String) -> Self {
        Self {
            inner,
            key,
            path,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Registers a subscriber and returns the receiving end of its
    /// change-event channel.
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.push(tx);
        rx
    }

    /// Assigns `value` to `field` within the observed mapping.
    ///
    /// When `value` differs from the current one, a [`ChangeEvent`] is
    /// emitted to every subscriber and then the assignment is applied and
    /// persisted per the store's save policy. An equal value emits
    /// nothing and leaves the document untouched. Rejected while the
    /// store is locked.
    pub fn set(&self, field: &str, value: Value) -> Result<()> {
        self.inner.check_unlocked("observe.set")?;
        let changed = {
            let mut doc = self.inner.write_doc()?;
            let root = doc.entry(self.key.as_str()).or_insert(Value::Null);
            let slot = json_path::entry(root, &self.path);
            if !slot.is_object() {
                // The observed mapping was replaced or deleted out from
                // under the handle; recreate it, same as observe() does.
                *slot = Value::Object(Document::new());
            }
            let map = match slot {
                Value::Object(map) => map,
                _ => unreachable!("set to an object above"),
            };
            if map.get(field) == Some(&value) {
                false
            } else {
                self.emit(ChangeEvent {
                    field: field.to_string(),
                    value: value.clone(),
                });
                map.insert(field.to_string(), value);
                true
            }
        };
        if changed {
            self.inner.schedule_save()?;
        }
        Ok(())
    }

    /// Reads `field` from the observed mapping.
    pub fn get(&self, field: &str) -> Result<Option<Value>> {
        let doc = self.inner.read_doc()?;
        Ok(doc
            .get(&self.key)
            .and_then(|v| json_path::get(v, &self.path))
            .and_then(|v| v.get(field))
            .cloned())
    }

    /// The top-level key this handle is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The dotted path this handle is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn emit(&self, event: ChangeEvent) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        // Disconnected receivers are dropped on the way through
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
