//! Port contract exercised against every backend

use pretty_assertions::assert_eq;
use satchel_store::{FileKv, Kv, MemoryKv};
use tempfile::TempDir;

fn contract(store: &dyn Kv) {
    // absent key reads as None
    assert_eq!(store.get("cart").unwrap(), None);

    // put is visible and replaces wholesale
    store.put("cart", "first").unwrap();
    assert_eq!(store.get("cart").unwrap().as_deref(), Some("first"));
    store.put("cart", "second").unwrap();
    assert_eq!(store.get("cart").unwrap().as_deref(), Some("second"));

    // keys are independent
    store.put("session", "token").unwrap();
    assert_eq!(store.get("cart").unwrap().as_deref(), Some("second"));

    // remove is idempotent
    store.remove("cart").unwrap();
    assert_eq!(store.get("cart").unwrap(), None);
    store.remove("cart").unwrap();

    // invalid keys never reach the backend
    assert!(store.get("a/b").is_err());
    assert!(store.put(".hidden", "x").is_err());
    assert!(store.remove("").is_err());
}

#[test]
fn memory_backend_honors_contract() {
    let store = MemoryKv::new();
    contract(&store);
}

#[test]
fn file_backend_honors_contract() {
    let dir = TempDir::new().unwrap();
    let store = FileKv::new(dir.path()).unwrap();
    contract(&store);
}

#[test]
fn backends_agree_on_stored_value() {
    let dir = TempDir::new().unwrap();
    let file = FileKv::new(dir.path()).unwrap();
    let memory = MemoryKv::new();

    let payload = r#"[{"id":1,"name":"tote","quantity":3}]"#;
    file.put("cart", payload).unwrap();
    memory.put("cart", payload).unwrap();

    assert_eq!(file.get("cart").unwrap(), memory.get("cart").unwrap());
}
