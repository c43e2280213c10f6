use async_trait::async_trait;
use thiserror::Error;

use catfacts_core::domain::fact::Fact;

pub mod fact;

pub use fact::SqlFactRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait FactRepository: Send + Sync {
    /// Every fact in the backing table, ordered by ascending id.
    async fn load_all(&self) -> Result<Vec<Fact>, RepositoryError>;
}
