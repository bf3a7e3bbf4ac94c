use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 已持久化的短链接记录
///
/// The JSON form (`id`, `small_url`, `origin_url` plus timestamps) is what
/// `POST /all` returns and what the admin list renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortUrl {
    pub id: i64,
    pub small_url: String,
    pub origin_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待插入的短链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub small_url: String,
    pub origin_url: String,
}
