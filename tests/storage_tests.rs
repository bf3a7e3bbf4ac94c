//! SeaORM 存储集成测试（SQLite 临时数据库）

use linkboard::config::DatabaseConfig;
use linkboard::errors::LinkboardError;
use linkboard::storage::{NewShortUrl, SeaOrmStorage};
use tempfile::TempDir;

async fn create_storage(dir: &TempDir) -> SeaOrmStorage {
    let db_path = dir.path().join("storage_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::default())
        .await
        .expect("创建存储失败")
}

fn new_link(small: &str, origin: &str) -> NewShortUrl {
    NewShortUrl {
        small_url: small.to_string(),
        origin_url: origin.to_string(),
    }
}

#[tokio::test]
async fn test_insert_and_list_in_id_order() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;

    let first = storage.insert(new_link("b", "https://b.example")).await.unwrap();
    let second = storage.insert(new_link("a", "https://a.example")).await.unwrap();
    assert!(second > first);

    let links = storage.list().await.unwrap();
    let smalls: Vec<_> = links.iter().map(|l| l.small_url.as_str()).collect();
    assert_eq!(smalls, vec!["b", "a"]);
    assert_eq!(links[0].id, first);
    assert_eq!(storage.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_duplicate_small_url_is_conflict() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;

    storage.insert(new_link("dup", "https://one.example")).await.unwrap();
    let err = storage
        .insert(new_link("dup", "https://two.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, LinkboardError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_by_small_url_and_id() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;

    let id = storage.insert(new_link("gh", "https://github.com")).await.unwrap();

    let by_code = storage.get_by_small_url("gh").await.unwrap().unwrap();
    assert_eq!(by_code.id, id);
    assert_eq!(by_code.origin_url, "https://github.com");

    assert!(storage.get_by_small_url("missing").await.unwrap().is_none());
    assert!(storage.get_by_id(id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_changes_fields_and_keeps_created_at() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;

    let id = storage.insert(new_link("old", "https://old.example")).await.unwrap();
    let original = storage.get_by_id(id).await.unwrap().unwrap();

    let mut changed = original.clone();
    changed.small_url = "new".to_string();
    changed.origin_url = "https://new.example".to_string();
    let updated = storage.update(&changed).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.small_url, "new");
    assert_eq!(updated.origin_url, "https://new.example");
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
    assert!(storage.get_by_small_url("old").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;

    let id = storage.insert(new_link("x", "https://x.example")).await.unwrap();
    let mut ghost = storage.get_by_id(id).await.unwrap().unwrap();
    ghost.id = id + 42;

    let err = storage.update(&ghost).await.unwrap_err();
    assert!(matches!(err, LinkboardError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;

    let id = storage.insert(new_link("gone", "https://gone.example")).await.unwrap();
    assert!(storage.remove(id).await.unwrap());
    assert!(!storage.remove(id).await.unwrap());
    assert!(storage.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reopen_keeps_data() {
    let dir = TempDir::new().unwrap();
    {
        let storage = create_storage(&dir).await;
        storage.insert(new_link("keep", "https://keep.example")).await.unwrap();
    }
    let storage = create_storage(&dir).await;
    assert_eq!(storage.list().await.unwrap().len(), 1);
    assert_eq!(storage.backend_name(), "sqlite");
}
