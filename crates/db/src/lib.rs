pub mod connection;
pub mod fixtures;
pub mod repositories;

pub use connection::{connect_read_only, connect_with_settings, DbPool};
pub use repositories::{FactRepository, RepositoryError, SqlFactRepository};
