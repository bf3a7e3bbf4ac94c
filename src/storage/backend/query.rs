//! Read operations for SeaOrmStorage

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::model_to_short_url;
use crate::errors::{LinkboardError, Result};
use crate::storage::ShortUrl;

use migration::entities::short_url;

impl SeaOrmStorage {
    /// 全部记录，按 id 升序（即插入顺序）
    pub async fn list(&self) -> Result<Vec<ShortUrl>> {
        let db = &self.db;

        let models = self
            .retry_policy
            .run("list", || async {
                short_url::Entity::find()
                    .order_by_asc(short_url::Column::Id)
                    .all(db)
                    .await
            })
            .await
            .map_err(|e| {
                LinkboardError::database_operation(format!("failed to list links: {}", e))
            })?;

        debug!("Loaded {} short urls", models.len());
        Ok(models.into_iter().map(model_to_short_url).collect())
    }

    pub async fn get_by_small_url(&self, small_url: &str) -> Result<Option<ShortUrl>> {
        let db = &self.db;

        let model = self
            .retry_policy
            .run(&format!("get_by_small_url({})", small_url), || async {
                short_url::Entity::find()
                    .filter(short_url::Column::SmallUrl.eq(small_url))
                    .one(db)
                    .await
            })
            .await
            .map_err(|e| {
                LinkboardError::database_operation(format!("failed to query link: {}", e))
            })?;

        Ok(model.map(model_to_short_url))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ShortUrl>> {
        let db = &self.db;

        let model = self
            .retry_policy
            .run(&format!("get_by_id({})", id), || async {
                short_url::Entity::find_by_id(id).one(db).await
            })
            .await
            .map_err(|e| {
                LinkboardError::database_operation(format!("failed to query link: {}", e))
            })?;

        Ok(model.map(model_to_short_url))
    }

    pub async fn count(&self) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        short_url::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                LinkboardError::database_operation(format!("failed to count links: {}", e))
            })
    }
}
