use super::*;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Rejected { op: "read", key: key.to_owned(), reason: "SecurityError".to_owned() })
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected { op: "write", key: key.to_owned(), reason: "QuotaExceededError".to_owned() })
    }
}

#[test]
fn memory_store_reads_back_written_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
    store.set("k", "w");
    assert_eq!(store.read("k"), Ok(Some("w".to_owned())));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::with_entries([("a", "1")]);
    let other = store.clone();
    other.set("b", "2");
    assert_eq!(store.get("a"), Some("1".to_owned()));
    assert_eq!(store.get("b"), Some("2".to_owned()));
}

#[test]
fn get_reports_absent_when_read_fails() {
    assert_eq!(BrokenStore.get("wanil-theme"), None);
}

#[test]
fn set_swallows_write_failures() {
    BrokenStore.set("wanil-theme", "light");
    assert!(BrokenStore.write("wanil-theme", "light").is_err());
}

#[test]
fn store_error_messages_name_the_operation() {
    let err = StoreError::Rejected { op: "write", key: "wanil-lang".to_owned(), reason: "denied".to_owned() };
    assert_eq!(err.to_string(), "storage rejected write for wanil-lang: denied");
    assert_eq!(StoreError::Unavailable.to_string(), "storage is unavailable");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_unavailable_outside_the_browser() {
    assert_eq!(BrowserStore.read("k"), Err(StoreError::Unavailable));
    assert_eq!(BrowserStore.get("k"), None);
    BrowserStore.set("k", "v");
}
