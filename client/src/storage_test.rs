use super::*;

#[test]
fn native_build_reads_nothing() {
    assert_eq!(BrowserStore.get("userLocation"), None);
}

#[test]
fn native_build_rejects_writes() {
    let err = BrowserStore.set("isLoggedIn", "true").expect_err("no storage");
    assert!(matches!(err, StorageWriteFailure::Unavailable));
}

#[test]
fn native_remove_and_clear_are_noops() {
    BrowserStore.remove("userProfile");
    BrowserStore.clear();
    assert_eq!(BrowserStore.get("userProfile"), None);
}
