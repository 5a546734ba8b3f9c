//! Addresses repository

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use super::{write_error, Store};
use crate::{
    error::AppResult,
    models::{Address, City, Entity},
};

const SELECT_ADDRESSES: &str = r#"
    SELECT a.id, a.number, a.street, a.postal_code, c.city_name
    FROM addresses a
    JOIN cities c ON c.postal_code = a.postal_code
"#;

#[derive(Debug, FromRow)]
struct AddressRow {
    id: String,
    number: i32,
    street: String,
    postal_code: String,
    city_name: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            id: row.id,
            number: row.number,
            street: row.street,
            city: City {
                postal_code: row.postal_code.clone(),
                city_name: row.city_name,
            },
            postal_code: row.postal_code,
        }
    }
}

#[derive(Clone)]
pub struct AddressesRepository {
    pool: Pool<Postgres>,
}

impl AddressesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Address> for AddressesRepository {
    async fn get_one(&self, id: &str) -> AppResult<Option<Address>> {
        let query = format!("{} WHERE a.id = $1", SELECT_ADDRESSES);
        let row = sqlx::query_as::<_, AddressRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Address::from))
    }

    async fn get_all(&self) -> AppResult<Vec<Address>> {
        let query = format!("{} ORDER BY a.postal_code, a.street, a.number", SELECT_ADDRESSES);
        let rows = sqlx::query_as::<_, AddressRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Address::from).collect())
    }

    async fn create(&self, address: &Address) -> AppResult<Address> {
        sqlx::query(
            "INSERT INTO addresses (id, number, street, postal_code) VALUES ($1, $2, $3, $4)",
        )
        .bind(&address.id)
        .bind(address.number)
        .bind(&address.street)
        .bind(&address.postal_code)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, Address::NAME, &address.id))?;
        Ok(address.clone())
    }

    async fn update(&self, address: &Address, id: &str) -> AppResult<Address> {
        let result = sqlx::query(
            "UPDATE addresses SET number = $2, street = $3, postal_code = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(address.number)
        .bind(&address.street)
        .bind(&address.postal_code)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, Address::NAME, id))?;
        if result.rows_affected() == 0 {
            return Err(Address::not_found(id));
        }
        Ok(address.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
