use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::{NewShortUrl, ShortUrl};
use migration::entities::short_url;

/// 将 Sea-ORM Model 转换为 ShortUrl
pub fn model_to_short_url(model: short_url::Model) -> ShortUrl {
    ShortUrl {
        id: model.id,
        small_url: model.small_url,
        origin_url: model.origin_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// 构造插入用的 ActiveModel，id 交给数据库分配
pub fn new_short_url_to_active_model(
    new: &NewShortUrl,
    now: DateTime<Utc>,
) -> short_url::ActiveModel {
    short_url::ActiveModel {
        id: NotSet,
        small_url: Set(new.small_url.clone()),
        origin_url: Set(new.origin_url.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// 构造更新用的 ActiveModel，created_at 保持不变
pub fn short_url_to_update_model(record: &ShortUrl, now: DateTime<Utc>) -> short_url::ActiveModel {
    short_url::ActiveModel {
        id: Set(record.id),
        small_url: Set(record.small_url.clone()),
        origin_url: Set(record.origin_url.clone()),
        created_at: NotSet,
        updated_at: Set(now),
    }
}
