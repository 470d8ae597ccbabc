#![no_main]

use arbitrary::Arbitrary;
use jsonpool_store::{DocumentStore, StoreConfig};
use libfuzzer_sys::fuzz_target;
use serde_json::json;

#[derive(Debug, Arbitrary)]
enum Op {
    Set { key: String, path: String, n: i64 },
    Get { key: String, path: String },
    Ensure { key: String, path: String, n: i64 },
    Has { key: String, path: String },
    Delete { key: String },
    Lock,
    Unlock,
    Clear,
    Flush,
}

fuzz_target!(|ops: Vec<Op>| {
    if ops.len() > 64 {
        return;
    }

    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(_) => return,
    };
    let store = match DocumentStore::open(dir.path().join("db.json"), StoreConfig::default()) {
        Ok(store) => store,
        Err(_) => return,
    };

    for op in ops {
        match op {
            Op::Set { key, path, n } => {
                let _ = store.set_at(&key, json!(n), &path);
            }
            Op::Get { key, path } => {
                let _ = store.get_at(&key, &path);
            }
            Op::Ensure { key, path, n } => {
                let _ = store.ensure_at(&key, json!(n), &path);
            }
            Op::Has { key, path } => {
                let _ = store.has_at(&key, &path);
            }
            Op::Delete { key } => {
                let _ = store.delete(&key);
            }
            Op::Lock => store.lock(),
            Op::Unlock => store.unlock(),
            Op::Clear => {
                let _ = store.clear();
            }
            Op::Flush => {
                let _ = store.flush();
            }
        }
    }

    // Whatever happened, the backing file must still parse as a document
    if store.flush().is_ok() {
        let reopened = DocumentStore::open(dir.path().join("db.json"), StoreConfig::default());
        assert!(reopened.is_ok());
    }
});
