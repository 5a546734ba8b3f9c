//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{write_error, Store};
use crate::{
    error::AppResult,
    models::{Author, Entity},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Author> for AuthorsRepository {
    async fn get_one(&self, id: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT author_id, name, last_name, date_of_birth FROM authors WHERE author_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn get_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT author_id, name, last_name, date_of_birth FROM authors ORDER BY last_name, name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, author: &Author) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (author_id, name, last_name, date_of_birth)
            VALUES ($1, $2, $3, $4)
            RETURNING author_id, name, last_name, date_of_birth
            "#,
        )
        .bind(&author.author_id)
        .bind(&author.name)
        .bind(&author.last_name)
        .bind(author.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, Author::NAME, &author.author_id))
    }

    async fn update(&self, author: &Author, id: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors SET name = $2, last_name = $3, date_of_birth = $4
            WHERE author_id = $1
            RETURNING author_id, name, last_name, date_of_birth
            "#,
        )
        .bind(id)
        .bind(&author.name)
        .bind(&author.last_name)
        .bind(author.date_of_birth)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Author::not_found(id))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE author_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, Author::NAME, id))?;
        Ok(result.rows_affected() > 0)
    }
}
