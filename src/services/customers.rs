//! Customers service
//!
//! Customers are addressed by JMBG; a path value that is not a well-formed
//! JMBG is rejected before the store is consulted.

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, remove};
use crate::{
    error::AppResult,
    models::{
        customer::{CreateCustomer, UpdateCustomer},
        Customer, Jmbg,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl CustomersService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Customer>> {
        let customers = self.repository.customers.get_all().await?;
        tracing::debug!("Listed {} customers", customers.len());
        Ok(customers)
    }

    pub async fn get_one(&self, jmbg: &str) -> AppResult<Customer> {
        let jmbg = Jmbg::parse(jmbg)?;
        let customer: Customer = find(self.repository.customers.as_ref(), jmbg.as_str()).await?;
        record_read(self.observer.as_ref(), &customer);
        Ok(customer)
    }

    pub async fn create(&self, data: CreateCustomer) -> AppResult<Customer> {
        data.validate()?;
        let customer = data.into_customer()?;
        let created = self.repository.customers.create(&customer).await?;
        tracing::info!("Customer {} created", created.jmbg());
        Ok(created)
    }

    pub async fn update(&self, jmbg: &str, data: UpdateCustomer) -> AppResult<Customer> {
        let jmbg = Jmbg::parse(jmbg)?;
        data.validate()?;
        let existing: Customer = find(self.repository.customers.as_ref(), jmbg.as_str()).await?;
        let customer = data.apply_to(existing)?;
        let updated = self.repository.customers.update(&customer, jmbg.as_str()).await?;
        tracing::info!("Customer {} updated", jmbg);
        Ok(updated)
    }

    pub async fn delete(&self, jmbg: &str) -> AppResult<bool> {
        let jmbg = Jmbg::parse(jmbg)?;
        let deleted = remove::<Customer, _>(self.repository.customers.as_ref(), jmbg.as_str()).await?;
        tracing::info!("Customer {} deleted", jmbg);
        Ok(deleted)
    }
}
