use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl ItemError {
    /// Machine-readable code attached to the GraphQL error's `extensions`.
    pub fn code(&self) -> &'static str {
        match self {
            ItemError::NotFound(_) => "NOT_FOUND",
            ItemError::Storage(_) => "STORAGE_ERROR",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for ItemError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, ItemError>;
