//! LinkService 集成测试

use std::sync::Arc;

use linkboard::config::{DatabaseConfig, FeaturesConfig};
use linkboard::errors::LinkboardError;
use linkboard::services::{CreateLinkRequest, LinkService, UpdateLinkRequest};
use linkboard::storage::SeaOrmStorage;
use tempfile::TempDir;

async fn create_service(dir: &TempDir) -> LinkService {
    let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display());
    let storage = SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::default())
        .await
        .expect("创建存储失败");
    LinkService::new(Arc::new(storage), &FeaturesConfig::default())
}

fn create_req(small: &str, origin: &str) -> CreateLinkRequest {
    CreateLinkRequest {
        small_url: Some(small.to_string()),
        origin_url: origin.to_string(),
    }
}

fn validation_message(err: LinkboardError) -> String {
    match err {
        LinkboardError::Validation(msg) => msg,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_normalises_paths() {
    let dir = TempDir::new().unwrap();
    let service = create_service(&dir).await;

    let link = service
        .create(create_req(" /docs/ ", " https://example.com/docs/ "))
        .await
        .unwrap();
    assert_eq!(link.small_url, "docs");
    assert_eq!(link.origin_url, "https://example.com/docs");
}

#[tokio::test]
async fn test_create_validation_messages() {
    let dir = TempDir::new().unwrap();
    let service = create_service(&dir).await;

    let err = service.create(create_req(" / ", "https://a.example")).await.unwrap_err();
    assert_eq!(validation_message(err), "empty url");

    let err = service.create(create_req("a", "  ")).await.unwrap_err();
    assert_eq!(validation_message(err), "empty origin url");

    let err = service.create(create_req("a", "example.com")).await.unwrap_err();
    assert_eq!(validation_message(err), "incorrect origin url");

    let err = service
        .create(create_req("a", "javascript:alert(1)"))
        .await
        .unwrap_err();
    assert!(validation_message(err).starts_with("dangerous protocol blocked"));

    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_generated_fills_random_code() {
    let dir = TempDir::new().unwrap();
    let service = create_service(&dir).await;

    let link = service
        .create_generated(CreateLinkRequest {
            small_url: None,
            origin_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(link.small_url.len(), 16);
    assert!(link.small_url.chars().all(|c| c.is_ascii_alphanumeric()));

    let named = service
        .create_generated(create_req("named", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(named.small_url, "named");
}

#[tokio::test]
async fn test_duplicate_create_is_conflict() {
    let dir = TempDir::new().unwrap();
    let service = create_service(&dir).await;

    service.create(create_req("same", "https://a.example")).await.unwrap();
    let err = service
        .create(create_req("/same/", "https://b.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, LinkboardError::Conflict(_)));
}

#[tokio::test]
async fn test_update_resolve_delete() {
    let dir = TempDir::new().unwrap();
    let service = create_service(&dir).await;

    let link = service.create(create_req("a", "https://a.example")).await.unwrap();
    let updated = service
        .update(UpdateLinkRequest {
            id: link.id,
            small_url: "b/".to_string(),
            origin_url: "https://b.example".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.small_url, "b");

    assert_eq!(service.resolve("/b").await.unwrap().origin_url, "https://b.example");
    assert!(matches!(
        service.resolve("a").await,
        Err(LinkboardError::NotFound(_))
    ));

    service.delete(link.id).await.unwrap();
    service.delete(link.id).await.unwrap();
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_unknown_and_invalid() {
    let dir = TempDir::new().unwrap();
    let service = create_service(&dir).await;

    let err = service
        .update(UpdateLinkRequest {
            id: 999,
            small_url: "x".to_string(),
            origin_url: "https://x.example".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LinkboardError::NotFound(_)));

    let err = service
        .update(UpdateLinkRequest {
            id: 1,
            small_url: "x".to_string(),
            origin_url: "".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "empty origin url");
}
