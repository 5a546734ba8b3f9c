//! Addresses service

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, remove, resolve};
use crate::{
    error::AppResult,
    models::{
        address::{CreateAddress, UpdateAddress},
        Address, City,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AddressesService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl AddressesService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    async fn city(&self, postal_code: &str) -> AppResult<City> {
        resolve(self.repository.cities.as_ref(), postal_code).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<Address>> {
        let addresses = self.repository.addresses.get_all().await?;
        tracing::debug!("Listed {} addresses", addresses.len());
        Ok(addresses)
    }

    pub async fn get_one(&self, id: &str) -> AppResult<Address> {
        let address: Address = find(self.repository.addresses.as_ref(), id).await?;
        record_read(self.observer.as_ref(), &address);
        Ok(address)
    }

    /// Create an address inside the city with `postal_code`
    pub async fn create(&self, postal_code: &str, data: CreateAddress) -> AppResult<Address> {
        data.validate()?;
        let city = self.city(postal_code).await?;
        let address = data.into_address(city)?;
        let created = self.repository.addresses.create(&address).await?;
        tracing::info!("Address {} created in {}", created.id, postal_code);
        Ok(created)
    }

    /// Update an address; a `postal_code` moves it to that city
    pub async fn update(
        &self,
        id: &str,
        postal_code: Option<&str>,
        data: UpdateAddress,
    ) -> AppResult<Address> {
        data.validate()?;
        let existing: Address = find(self.repository.addresses.as_ref(), id).await?;
        let city = match postal_code {
            Some(postal_code) => Some(self.city(postal_code).await?),
            None => None,
        };
        let address = data.apply_to(existing, city)?;
        let updated = self.repository.addresses.update(&address, id).await?;
        tracing::info!("Address {} updated", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let deleted = remove::<Address, _>(self.repository.addresses.as_ref(), id).await?;
        tracing::info!("Address {} deleted", id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::city::{CreateCity, UpdateCity};
    use crate::services::{testing::services, Services};

    fn knez_mihailova() -> CreateAddress {
        CreateAddress {
            id: Some("1".into()),
            number: Some(5),
            street: Some("Knez Mihailova".into()),
        }
    }

    async fn with_cities(services: &Services) {
        services.cities.create(CreateCity::new("11000", "Belgrade")).await.unwrap();
        services.cities.create(CreateCity::new("21000", "Novi Sad")).await.unwrap();
    }

    #[tokio::test]
    async fn test_address_takes_city_from_postal_code() {
        let services = services();
        with_cities(&services).await;

        let created = services.addresses.create("11000", knez_mihailova()).await.unwrap();
        assert_eq!(created.city.city_name, "Belgrade");
        assert_eq!(created.postal_code, "11000");

        let fetched = services.addresses.get_one("1").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.city.city_name, "Belgrade");
    }

    #[tokio::test]
    async fn test_unknown_city_is_missing_reference() {
        let services = services();
        let err = services.addresses.create("11000", knez_mihailova()).await.unwrap_err();
        assert!(matches!(err, AppError::MissingReference(_)));
    }

    #[tokio::test]
    async fn test_zero_number_passes_rules_but_not_constructor() {
        let services = services();
        with_cities(&services).await;
        let data = CreateAddress {
            number: Some(0),
            ..knez_mihailova()
        };
        let err = services.addresses.create("11000", data).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_fields() {
        let services = services();
        with_cities(&services).await;
        let data = CreateAddress {
            id: Some("0".into()),
            number: Some(-10),
            street: None,
        };
        let err = services.addresses.create("11000", data).await.unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "number", "street"]);
    }

    #[tokio::test]
    async fn test_update_moves_address_to_other_city() {
        let services = services();
        with_cities(&services).await;
        services.addresses.create("11000", knez_mihailova()).await.unwrap();

        let updated = services
            .addresses
            .update(
                "1",
                Some("21000"),
                UpdateAddress {
                    number: Some(12),
                    street: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.number, 12);
        assert_eq!(updated.street, "Knez Mihailova");
        assert_eq!(updated.city.city_name, "Novi Sad");
        assert_eq!(updated.postal_code, "21000");

        let err = services
            .addresses
            .update("1", Some("34000"), UpdateAddress::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingReference(_)));
    }

    #[tokio::test]
    async fn test_address_follows_city_rename_and_delete() {
        let services = services();
        with_cities(&services).await;
        services.addresses.create("11000", knez_mihailova()).await.unwrap();

        services
            .cities
            .update(
                "11000",
                UpdateCity {
                    city_name: Some("Beograd".into()),
                },
            )
            .await
            .unwrap();
        let fetched = services.addresses.get_one("1").await.unwrap();
        assert_eq!(fetched.city.city_name, "Beograd");

        assert!(services.cities.delete("11000").await.unwrap());
        assert!(services.addresses.get_one("1").await.unwrap_err().is_not_found());
        assert!(services.addresses.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_address_is_not_found() {
        let services = services();
        assert!(services.addresses.delete("42").await.unwrap_err().is_not_found());
    }
}
