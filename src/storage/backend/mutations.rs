//! Write operations for SeaOrmStorage

use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{
    model_to_short_url, new_short_url_to_active_model, short_url_to_update_model,
};
use crate::errors::{LinkboardError, Result};
use crate::storage::{NewShortUrl, ShortUrl};

use migration::entities::short_url;

/// 唯一约束冲突映射为 Conflict，其余为数据库操作错误
fn map_write_error(err: DbErr, small_url: &str, action: &str) -> LinkboardError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return LinkboardError::conflict(format!("short url '{}' already exists", small_url));
    }
    LinkboardError::database_operation(format!("failed to {} link: {}", action, err))
}

impl SeaOrmStorage {
    /// 插入新记录，返回数据库分配的 id
    pub async fn insert(&self, new: NewShortUrl) -> Result<i64> {
        let db = &self.db;
        let now = Utc::now();

        let result = self
            .retry_policy
            .run(&format!("insert({})", new.small_url), || async {
                short_url::Entity::insert(new_short_url_to_active_model(&new, now))
                    .exec(db)
                    .await
            })
            .await
            .map_err(|e| map_write_error(e, &new.small_url, "insert"))?;

        info!("Short url created: {} -> {}", new.small_url, new.origin_url);
        Ok(result.last_insert_id)
    }

    /// 按 id 更新 small_url / origin_url
    pub async fn update(&self, record: &ShortUrl) -> Result<ShortUrl> {
        let db = &self.db;
        let now = Utc::now();

        let updated = self
            .retry_policy
            .run(&format!("update({})", record.id), || async {
                short_url::Entity::update(short_url_to_update_model(record, now))
                    .exec(db)
                    .await
            })
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => {
                    LinkboardError::not_found(format!("short url {} not found", record.id))
                }
                other => map_write_error(other, &record.small_url, "update"),
            })?;

        info!("Short url updated: {}", record.id);
        Ok(model_to_short_url(updated))
    }

    /// 按 id 删除，不存在时视为成功；返回是否删除了记录
    pub async fn remove(&self, id: i64) -> Result<bool> {
        let db = &self.db;

        let result = self
            .retry_policy
            .run(&format!("remove({})", id), || async {
                short_url::Entity::delete_by_id(id).exec(db).await
            })
            .await
            .map_err(|e| {
                LinkboardError::database_operation(format!("failed to delete link: {}", e))
            })?;

        if result.rows_affected > 0 {
            info!("Short url deleted: {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
