//! Link management service
//!
//! Normalisation and validation rules shared by the HTTP handlers and the
//! CLI.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::FeaturesConfig;
use crate::errors::{LinkboardError, Result};
use crate::storage::{NewShortUrl, SeaOrmStorage, ShortUrl};
use crate::utils::url_validator::validate_origin_url;
use crate::utils::{generate_random_code, normalize_path};

use super::reachability::is_reachable;

/// Request to create a link
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    pub small_url: Option<String>,
    pub origin_url: String,
}

/// Request to change an existing link
#[derive(Debug, Clone)]
pub struct UpdateLinkRequest {
    pub id: i64,
    pub small_url: String,
    pub origin_url: String,
}

pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
    random_code_length: usize,
    check_reachability: bool,
}

impl LinkService {
    pub fn new(storage: Arc<SeaOrmStorage>, features: &FeaturesConfig) -> Self {
        Self {
            storage,
            random_code_length: features.random_code_length,
            check_reachability: features.check_reachability,
        }
    }

    pub fn storage(&self) -> &Arc<SeaOrmStorage> {
        &self.storage
    }

    /// Normalised origin URL, or the validation error a client sees
    async fn checked_origin(&self, origin_url: &str) -> Result<String> {
        let origin = normalize_path(origin_url);
        if origin.is_empty() {
            return Err(LinkboardError::validation("empty origin url"));
        }
        validate_origin_url(origin).map_err(|e| LinkboardError::validation(e.client_message()))?;

        if self.check_reachability && !is_reachable(origin).await {
            warn!("Origin url is unreachable: {}", origin);
            return Err(LinkboardError::validation("origin url is unreachable"));
        }
        Ok(origin.to_string())
    }

    async fn store(&self, small_url: String, origin_url: String) -> Result<ShortUrl> {
        let id = self
            .storage
            .insert(NewShortUrl {
                small_url,
                origin_url,
            })
            .await?;

        self.storage
            .get_by_id(id)
            .await?
            .ok_or_else(|| LinkboardError::internal(format!("inserted link {} vanished", id)))
    }

    /// Create a link with a caller-chosen short path
    pub async fn create(&self, req: CreateLinkRequest) -> Result<ShortUrl> {
        let small_url = normalize_path(req.small_url.as_deref().unwrap_or_default()).to_string();
        if small_url.is_empty() {
            return Err(LinkboardError::validation("empty url"));
        }
        let origin_url = self.checked_origin(&req.origin_url).await?;

        let link = self.store(small_url, origin_url).await?;
        info!("LinkService: created '{}' -> '{}'", link.small_url, link.origin_url);
        Ok(link)
    }

    /// Create a link, generating the short path when none is given
    pub async fn create_generated(&self, req: CreateLinkRequest) -> Result<ShortUrl> {
        let small_url = normalize_path(req.small_url.as_deref().unwrap_or_default());
        let small_url = if small_url.is_empty() {
            generate_random_code(self.random_code_length)
        } else {
            small_url.to_string()
        };
        let origin_url = self.checked_origin(&req.origin_url).await?;

        let link = self.store(small_url, origin_url).await?;
        info!("LinkService: created '{}' -> '{}'", link.small_url, link.origin_url);
        Ok(link)
    }

    pub async fn update(&self, req: UpdateLinkRequest) -> Result<ShortUrl> {
        let small_url = normalize_path(&req.small_url).to_string();
        if small_url.is_empty() {
            return Err(LinkboardError::validation("empty url"));
        }
        let origin_url = self.checked_origin(&req.origin_url).await?;

        let existing = self
            .storage
            .get_by_id(req.id)
            .await?
            .ok_or_else(|| LinkboardError::not_found("not found"))?;

        let updated = self
            .storage
            .update(&ShortUrl {
                small_url,
                origin_url,
                ..existing
            })
            .await?;

        info!("LinkService: updated link {}", updated.id);
        Ok(updated)
    }

    /// Deleting an id that does not exist is not an error
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.storage.remove(id).await? {
            info!("LinkService: delete of unknown link {} ignored", id);
        }
        Ok(())
    }

    /// Look up the record behind a short path
    pub async fn resolve(&self, small_url: &str) -> Result<ShortUrl> {
        self.storage
            .get_by_small_url(normalize_path(small_url))
            .await?
            .ok_or_else(|| LinkboardError::not_found("not found"))
    }

    pub async fn list(&self) -> Result<Vec<ShortUrl>> {
        self.storage.list().await
    }
}
