//! Admins repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{write_error, Store};
use crate::{
    error::AppResult,
    models::{Admin, Entity},
};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Postgres>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Admin> for AdminsRepository {
    async fn get_one(&self, id: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT admin_id, first_name, last_name, date_of_birth FROM admins WHERE admin_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    async fn get_all(&self) -> AppResult<Vec<Admin>> {
        let rows = sqlx::query_as::<_, Admin>(
            "SELECT admin_id, first_name, last_name, date_of_birth FROM admins ORDER BY admin_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, admin: &Admin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (admin_id, first_name, last_name, date_of_birth)
            VALUES ($1, $2, $3, $4)
            RETURNING admin_id, first_name, last_name, date_of_birth
            "#,
        )
        .bind(&admin.admin_id)
        .bind(&admin.first_name)
        .bind(&admin.last_name)
        .bind(admin.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, Admin::NAME, &admin.admin_id))
    }

    async fn update(&self, admin: &Admin, id: &str) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            r#"
            UPDATE admins SET first_name = $2, last_name = $3, date_of_birth = $4
            WHERE admin_id = $1
            RETURNING admin_id, first_name, last_name, date_of_birth
            "#,
        )
        .bind(id)
        .bind(&admin.first_name)
        .bind(&admin.last_name)
        .bind(admin.date_of_birth)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Admin::not_found(id))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE admin_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
