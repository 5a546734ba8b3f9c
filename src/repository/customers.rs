//! Customers repository

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use super::{write_error, Store};
use crate::{
    error::{AppError, AppResult},
    models::{Customer, Entity, Jmbg},
};

#[derive(Debug, FromRow)]
struct CustomerRow {
    jmbg: String,
    first_name: String,
    last_name: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = AppError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let jmbg = Jmbg::parse(row.jmbg.trim())
            .map_err(|e| AppError::Internal(format!("Stored customer is invalid: {}", e)))?;
        Customer::new(jmbg, row.first_name, row.last_name)
    }
}

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Customer> for CustomersRepository {
    async fn get_one(&self, id: &str) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, CustomerRow>(
            "SELECT jmbg, first_name, last_name FROM customers WHERE jmbg = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Customer::try_from)
        .transpose()
    }

    async fn get_all(&self) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, CustomerRow>(
            "SELECT jmbg, first_name, last_name FROM customers ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Customer::try_from)
        .collect()
    }

    async fn create(&self, customer: &Customer) -> AppResult<Customer> {
        sqlx::query("INSERT INTO customers (jmbg, first_name, last_name) VALUES ($1, $2, $3)")
            .bind(customer.jmbg().as_str())
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, Customer::NAME, customer.key()))?;
        Ok(customer.clone())
    }

    async fn update(&self, customer: &Customer, id: &str) -> AppResult<Customer> {
        let result =
            sqlx::query("UPDATE customers SET first_name = $2, last_name = $3 WHERE jmbg = $1")
                .bind(id)
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(Customer::not_found(id));
        }
        Ok(customer.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE jmbg = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
