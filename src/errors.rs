use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum LinkboardError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    Serialization(String),
    Transport(String),
    Internal(String),
}

impl LinkboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkboardError::DatabaseConfig(_) => "E001",
            LinkboardError::DatabaseConnection(_) => "E002",
            LinkboardError::DatabaseOperation(_) => "E003",
            LinkboardError::FileOperation(_) => "E004",
            LinkboardError::Validation(_) => "E005",
            LinkboardError::NotFound(_) => "E006",
            LinkboardError::Conflict(_) => "E007",
            LinkboardError::Serialization(_) => "E008",
            LinkboardError::Transport(_) => "E009",
            LinkboardError::Internal(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkboardError::DatabaseConfig(_) => "Database Configuration Error",
            LinkboardError::DatabaseConnection(_) => "Database Connection Error",
            LinkboardError::DatabaseOperation(_) => "Database Operation Error",
            LinkboardError::FileOperation(_) => "File Operation Error",
            LinkboardError::Validation(_) => "Validation Error",
            LinkboardError::NotFound(_) => "Resource Not Found",
            LinkboardError::Conflict(_) => "Conflict",
            LinkboardError::Serialization(_) => "Serialization Error",
            LinkboardError::Transport(_) => "Transport Error",
            LinkboardError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkboardError::DatabaseConfig(msg)
            | LinkboardError::DatabaseConnection(msg)
            | LinkboardError::DatabaseOperation(msg)
            | LinkboardError::FileOperation(msg)
            | LinkboardError::Validation(msg)
            | LinkboardError::NotFound(msg)
            | LinkboardError::Conflict(msg)
            | LinkboardError::Serialization(msg)
            | LinkboardError::Transport(msg)
            | LinkboardError::Internal(msg) => msg,
        }
    }

    /// HTTP status used when the error leaves an endpoint
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkboardError::Validation(_) => StatusCode::BAD_REQUEST,
            LinkboardError::NotFound(_) => StatusCode::NOT_FOUND,
            LinkboardError::Conflict(_) => StatusCode::CONFLICT,
            LinkboardError::Transport(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkboardError {}

// 便捷的构造函数
impl LinkboardError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkboardError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkboardError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkboardError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkboardError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkboardError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkboardError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        LinkboardError::Conflict(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkboardError::Serialization(msg.into())
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        LinkboardError::Transport(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        LinkboardError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LinkboardError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinkboardError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LinkboardError {
    fn from(err: std::io::Error) -> Self {
        LinkboardError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkboardError {
    fn from(err: serde_json::Error) -> Self {
        LinkboardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkboardError>;
