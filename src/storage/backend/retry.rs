//! 数据库操作重试
//!
//! Transient failures (pool exhaustion, lost connections, lock contention)
//! are retried with exponential backoff plus jitter.

use std::future::Future;
use std::time::Duration;

use sea_orm::DbErr;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::DatabaseConfig;

/// SQLSTATE / vendor codes for lock contention
/// MySQL 1213/1205, PostgreSQL 40001/40P01, SQLite BUSY(5)/LOCKED(6)
const TRANSIENT_DB_CODES: &[&str] = &["1213", "1205", "40001", "40P01", "5", "6"];

/// 判断数据库错误是否为瞬时错误
pub fn is_transient(err: &DbErr) -> bool {
    use sea_orm::error::RuntimeErr;

    let runtime = match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => return true,
        DbErr::Exec(runtime) | DbErr::Query(runtime) => runtime,
        _ => return false,
    };

    match runtime {
        RuntimeErr::SqlxError(sqlx_err) => {
            if let Some(db_err) = sqlx_err.as_database_error()
                && let Some(code) = db_err.code()
            {
                return TRANSIENT_DB_CODES.contains(&code.as_ref());
            }
            mentions_lock_contention(&sqlx_err.to_string())
        }
        RuntimeErr::Internal(msg) => mentions_lock_contention(msg),
        #[allow(unreachable_patterns)]
        _ => false,
    }
}

fn mentions_lock_contention(message: &str) -> bool {
    let message = message.to_lowercase();
    ["deadlock", "lock wait timeout", "database is locked", "serialization failure"]
        .iter()
        .any(|needle| message.contains(needle))
}

/// 重试策略
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

impl From<&DatabaseConfig> for RetryPolicy {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_retries: config.retry_count,
            base_delay_ms: config.retry_base_delay_ms,
            max_delay_ms: config.retry_max_delay_ms,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based), capped, plus 0-25% jitter
    pub fn backoff_ms(&self, attempt: u32) -> u64 {
        let exp = self
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exp.min(self.max_delay_ms);
        capped.saturating_add(rand::random_range(0..=capped / 4))
    }

    /// Run `operation`, retrying transient errors until the budget is spent
    pub async fn run<T, F, Fut>(&self, operation_name: &str, mut operation: F) -> Result<T, DbErr>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DbErr>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!("'{}' succeeded after {} retries", operation_name, attempt);
                    }
                    return Ok(value);
                }
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    attempt += 1;
                    let delay = self.backoff_ms(attempt);
                    warn!(
                        "'{}' failed (attempt {}/{}): {}; retrying in {} ms",
                        operation_name,
                        attempt,
                        self.max_retries + 1,
                        e,
                        delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
