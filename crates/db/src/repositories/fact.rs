use sqlx::Row;

use catfacts_core::domain::fact::{Fact, FactId};

use super::{FactRepository, RepositoryError};
use crate::DbPool;

pub struct SqlFactRepository {
    pool: DbPool,
}

impl SqlFactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_fact(row: &sqlx::sqlite::SqliteRow) -> Result<Fact, RepositoryError> {
    let id: i64 = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let message: String =
        row.try_get("message").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let image_url: String =
        row.try_get("imageUrl").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let tag: Option<String> =
        row.try_get("tag").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    Ok(Fact { id: FactId(id), message, image_url, tag })
}

#[async_trait::async_trait]
impl FactRepository for SqlFactRepository {
    async fn load_all(&self) -> Result<Vec<Fact>, RepositoryError> {
        let rows: Vec<sqlx::sqlite::SqliteRow> =
            sqlx::query("SELECT * FROM facts ORDER BY id ASC").fetch_all(&self.pool).await?;

        rows.iter().map(row_to_fact).collect()
    }
}

#[cfg(test)]
mod tests {
    use catfacts_core::domain::fact::FactId;

    use super::SqlFactRepository;
    use crate::connect_with_settings;
    use crate::fixtures;
    use crate::repositories::{FactRepository, RepositoryError};

    #[tokio::test]
    async fn load_all_maps_columns_and_orders_by_id() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        fixtures::create_schema(&pool).await.expect("schema");
        sqlx::query(
            "INSERT INTO facts (id, message, imageUrl, tag) VALUES
             (2, 'Cats have 32 muscles per ear.', 'http://x/2.jpg', NULL),
             (1, 'Cats sleep 70% of their lives.', 'http://x/1.jpg', 'sleep')",
        )
        .execute(&pool)
        .await
        .expect("insert facts");

        let facts = SqlFactRepository::new(pool.clone()).load_all().await.expect("load");

        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].id, FactId(1));
        assert_eq!(facts[0].message, "Cats sleep 70% of their lives.");
        assert_eq!(facts[0].image_url, "http://x/1.jpg");
        assert_eq!(facts[0].tag.as_deref(), Some("sleep"));
        assert_eq!(facts[1].id, FactId(2));
        assert_eq!(facts[1].tag, None);

        pool.close().await;
    }

    #[tokio::test]
    async fn load_all_returns_empty_for_empty_table() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        fixtures::create_schema(&pool).await.expect("schema");

        let facts = SqlFactRepository::new(pool.clone()).load_all().await.expect("load");
        assert!(facts.is_empty());

        pool.close().await;
    }

    #[tokio::test]
    async fn load_all_fails_when_table_is_missing() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");

        let result = SqlFactRepository::new(pool.clone()).load_all().await;
        assert!(matches!(result, Err(RepositoryError::Database(_))));

        pool.close().await;
    }

    #[tokio::test]
    async fn load_all_reports_decode_error_for_unexpected_schema() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        sqlx::query("CREATE TABLE facts (id INTEGER PRIMARY KEY, body TEXT)")
            .execute(&pool)
            .await
            .expect("create table");
        sqlx::query("INSERT INTO facts (id, body) VALUES (1, 'no message column')")
            .execute(&pool)
            .await
            .expect("insert");

        let result = SqlFactRepository::new(pool.clone()).load_all().await;
        assert!(matches!(result, Err(RepositoryError::Decode(_))));

        pool.close().await;
    }
}
