//! Cities repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{write_error, Store};
use crate::{
    error::AppResult,
    models::{City, Entity},
};

#[derive(Clone)]
pub struct CitiesRepository {
    pool: Pool<Postgres>,
}

impl CitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<City> for CitiesRepository {
    async fn get_one(&self, id: &str) -> AppResult<Option<City>> {
        let city = sqlx::query_as::<_, City>(
            "SELECT postal_code, city_name FROM cities WHERE postal_code = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(city)
    }

    async fn get_all(&self) -> AppResult<Vec<City>> {
        let rows = sqlx::query_as::<_, City>(
            "SELECT postal_code, city_name FROM cities ORDER BY postal_code",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, city: &City) -> AppResult<City> {
        sqlx::query_as::<_, City>(
            "INSERT INTO cities (postal_code, city_name) VALUES ($1, $2) RETURNING postal_code, city_name",
        )
        .bind(&city.postal_code)
        .bind(&city.city_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, City::NAME, &city.postal_code))
    }

    async fn update(&self, city: &City, id: &str) -> AppResult<City> {
        sqlx::query_as::<_, City>(
            "UPDATE cities SET city_name = $2 WHERE postal_code = $1 RETURNING postal_code, city_name",
        )
        .bind(id)
        .bind(&city.city_name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| City::not_found(id))
    }

    /// Addresses in the city are removed with it
    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cities WHERE postal_code = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
