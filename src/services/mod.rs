//! Application services orchestrating domain logic and side effects.
use std::path::PathBuf;

use crate::domain::TypeConstraintError;

pub mod config_loader;

/// Convenience alias for service results.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Validation(String),
    #[error("invalid base url")]
    BaseUrl(#[source] TypeConstraintError),
    #[error("{0}")]
    LogLevel(#[source] TypeConstraintError),
    #[error("failed to create data directory {}", .path.display())]
    DataDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("data directory {} is not writable", .path.display())]
    DataDirNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
