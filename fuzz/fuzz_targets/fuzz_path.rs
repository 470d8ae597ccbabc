#![no_main]

use jsonpool_core::path;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    // Split the input into a JSON document and a dotted path
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let (json_bytes, path_bytes) = data.split_at(split);
    let Ok(dotted) = std::str::from_utf8(&path_bytes[1..]) else {
        return;
    };

    let Ok(mut value) = serde_json::from_slice::<Value>(json_bytes) else {
        return;
    };

    // Keep array padding within reason
    if path::segments(dotted).any(|seg| matches!(seg.parse::<usize>(), Ok(i) if i > 4096)) {
        return;
    }

    // Read traversal must never panic or mutate
    let before = value.clone();
    let _ = path::get(&value, dotted);
    let _ = path::contains(&value, dotted);
    assert_eq!(value, before);

    // Write traversal must never panic, and the terminal slot it returns
    // must be reachable by a subsequent read
    let slot = path::entry(&mut value, dotted);
    *slot = Value::Bool(true);
    assert_eq!(path::get(&value, dotted), Some(&Value::Bool(true)));
});
