use std::sync::Arc;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{NewShortUrl, ShortUrl};

pub struct StorageFactory;

impl StorageFactory {
    /// 按全局配置创建存储
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        let database = &config.database;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(&database.database_url)?;

        let storage = SeaOrmStorage::new(&database.database_url, &backend_type, database).await?;
        Ok(Arc::new(storage))
    }
}
