//! Persistent skills storage backed by PostgreSQL.

use crate::domain::skill::Skill;
use crate::infra::config;
use crate::storage::SkillsStorage;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

/// Durable storage over a `skills` table. Id allocation rides on the table's
/// BIGSERIAL sequence, which Postgres never rewinds, so ids are not reused
/// after a delete.
#[derive(Clone)]
pub struct PostgresSkillsStorage {
    pool: PgPool,
}

impl PostgresSkillsStorage {
    /// Connects using `DATABASE_URL` and ensures the schema exists.
    pub async fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;
        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: PgPool) -> Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS skills (
                skill_id BIGSERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                rate INTEGER NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn row_to_skill(row: &sqlx::postgres::PgRow) -> Result<Skill> {
    let skill_id: i64 = row.try_get("skill_id")?;
    let name: String = row.try_get("name")?;
    let rate: i32 = row.try_get("rate")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Skill {
        skill_id,
        name,
        rate,
        updated_at,
    })
}

#[async_trait]
impl SkillsStorage for PostgresSkillsStorage {
    async fn get_all(&self) -> Result<Vec<Skill>> {
        let rows = sqlx::query(
            "SELECT skill_id, name, rate, updated_at FROM skills ORDER BY skill_id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_skill).collect()
    }

    async fn insert(&self, name: &str, rate: i32) -> Result<Skill> {
        let row = sqlx::query(
            "INSERT INTO skills (name, rate, updated_at) VALUES ($1, $2, now())
             RETURNING skill_id, name, rate, updated_at",
        )
        .bind(name)
        .bind(rate)
        .fetch_one(&self.pool)
        .await?;
        row_to_skill(&row)
    }

    async fn delete(&self, skill_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE skill_id = $1")
            .bind(skill_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM skills").execute(&self.pool).await?;
        Ok(())
    }
}
