use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Top-level initialization error for the content core.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("fatal database error")]
    Db(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
