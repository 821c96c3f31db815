//! Embedded store persistence tests.

use tempfile::TempDir;

use strand::{EmbeddedStore, StringFilters, StringRecord, StringStore};

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = EmbeddedStore::open(dir.path()).unwrap();
        store.insert(StringRecord::new("madam")).await.unwrap();
        store.insert(StringRecord::new("hello world")).await.unwrap();
    }

    let reopened = EmbeddedStore::open(dir.path()).unwrap();
    let all = reopened.list(&StringFilters::new()).await.unwrap();
    assert_eq!(all.len(), 2);

    let palindromes = reopened
        .list(&StringFilters::new().with_palindrome(true))
        .await
        .unwrap();
    assert_eq!(palindromes.len(), 1);
    assert_eq!(palindromes[0].value, "madam");
}

#[tokio::test]
async fn test_removal_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let hash = StringRecord::new("madam").id;

    {
        let store = EmbeddedStore::open(dir.path()).unwrap();
        store.insert(StringRecord::new("madam")).await.unwrap();
        store.insert(StringRecord::new("banana")).await.unwrap();
        store.remove(&hash).await.unwrap();
    }

    let reopened = EmbeddedStore::open(dir.path()).unwrap();
    assert!(reopened.get(&hash).await.unwrap().is_none());
    assert_eq!(reopened.stats().await.unwrap().string_count, 1);
}

#[tokio::test]
async fn test_duplicate_rejected_after_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = EmbeddedStore::open(dir.path()).unwrap();
        store.insert(StringRecord::new("madam")).await.unwrap();
    }

    let reopened = EmbeddedStore::open(dir.path()).unwrap();
    assert!(reopened.insert(StringRecord::new("madam")).await.is_err());
}

#[tokio::test]
async fn test_listing_order_is_stable() {
    let dir = TempDir::new().unwrap();
    let store = EmbeddedStore::open(dir.path()).unwrap();
    for value in ["first", "second", "third"] {
        store.insert(StringRecord::new(value)).await.unwrap();
    }

    let once = store.list(&StringFilters::new()).await.unwrap();
    let twice = store.list(&StringFilters::new()).await.unwrap();
    let order: Vec<&str> = once.iter().map(|r| r.value.as_str()).collect();
    let order_again: Vec<&str> = twice.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(order, order_again);
}
