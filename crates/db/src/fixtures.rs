//! Schema and canonical sample rows for building a `facts` database.
//!
//! Production deployments ship a prepared `facts.db`; these helpers create the
//! same table shape for tests and local development.

use catfacts_core::domain::fact::{Fact, FactId};
use sqlx::Executor;

use crate::connection::DbPool;
use crate::repositories::RepositoryError;

/// Column names match the shipped database, including the camel-cased `imageUrl`.
pub const FACTS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS facts (
    id INTEGER PRIMARY KEY,
    message TEXT NOT NULL,
    imageUrl TEXT NOT NULL,
    tag TEXT
)";

struct SampleFact {
    id: i64,
    message: &'static str,
    image_url: &'static str,
    tag: Option<&'static str>,
}

const SAMPLE_FACTS: &[SampleFact] = &[
    SampleFact {
        id: 1,
        message: "Cats sleep 70% of their lives.",
        image_url: "https://cdn2.thecatapi.com/images/sleep.jpg",
        tag: Some("sleep"),
    },
    SampleFact {
        id: 2,
        message: "Cats have 32 muscles in each ear.",
        image_url: "https://cdn2.thecatapi.com/images/ears.jpg",
        tag: None,
    },
    SampleFact {
        id: 3,
        message: "The heaviest domestic cat on record weighed 46 pounds 15.2 ounces.",
        image_url: "https://cdn2.thecatapi.com/images/fat.jpg",
        tag: Some("fat"),
    },
    SampleFact {
        id: 4,
        message: "A cat's nose print is unique, much like a human's fingerprint.",
        image_url: "https://cdn2.thecatapi.com/images/nose.jpg",
        tag: None,
    },
    SampleFact {
        id: 5,
        message: "Overweight cats are more prone to diabetes and arthritis.",
        image_url: "https://cdn2.thecatapi.com/images/chonk.jpg",
        tag: Some("fat"),
    },
];

pub fn sample_facts() -> Vec<Fact> {
    SAMPLE_FACTS
        .iter()
        .map(|sample| Fact {
            id: FactId(sample.id),
            message: sample.message.to_owned(),
            image_url: sample.image_url.to_owned(),
            tag: sample.tag.map(str::to_owned),
        })
        .collect()
}

pub async fn create_schema(pool: &DbPool) -> Result<(), RepositoryError> {
    pool.execute(FACTS_SCHEMA).await?;
    Ok(())
}

pub async fn insert_facts(pool: &DbPool, facts: &[Fact]) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;
    for fact in facts {
        sqlx::query("INSERT INTO facts (id, message, imageUrl, tag) VALUES (?, ?, ?, ?)")
            .bind(fact.id.0)
            .bind(&fact.message)
            .bind(&fact.image_url)
            .bind(fact.tag.as_deref())
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Creates the schema and inserts the sample facts. Returns the row count.
pub async fn seed_sample_facts(pool: &DbPool) -> Result<usize, RepositoryError> {
    let facts = sample_facts();
    create_schema(pool).await?;
    insert_facts(pool, &facts).await?;
    Ok(facts.len())
}
