//! Cities service

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, remove};
use crate::{
    error::AppResult,
    models::{
        city::{CreateCity, UpdateCity},
        City,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CitiesService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl CitiesService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<City>> {
        let cities = self.repository.cities.get_all().await?;
        tracing::debug!("Listed {} cities", cities.len());
        Ok(cities)
    }

    pub async fn get_one(&self, postal_code: &str) -> AppResult<City> {
        let city: City = find(self.repository.cities.as_ref(), postal_code).await?;
        record_read(self.observer.as_ref(), &city);
        Ok(city)
    }

    pub async fn create(&self, data: CreateCity) -> AppResult<City> {
        data.validate()?;
        let city = data.into_city()?;
        let created = self.repository.cities.create(&city).await?;
        tracing::info!("City {} ({}) created", created.city_name, created.postal_code);
        Ok(created)
    }

    pub async fn update(&self, postal_code: &str, data: UpdateCity) -> AppResult<City> {
        data.validate()?;
        let existing: City = find(self.repository.cities.as_ref(), postal_code).await?;
        let city = data.apply_to(existing)?;
        let updated = self.repository.cities.update(&city, postal_code).await?;
        tracing::info!("City {} updated", postal_code);
        Ok(updated)
    }

    /// Delete a city together with its addresses
    pub async fn delete(&self, postal_code: &str) -> AppResult<bool> {
        let deleted = remove::<City, _>(self.repository.cities.as_ref(), postal_code).await?;
        tracing::info!("City {} deleted", postal_code);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::testing::services;

    #[tokio::test]
    async fn test_create_then_get_one() {
        let services = services();
        let created = services
            .cities
            .create(CreateCity::new("11000", "Belgrade"))
            .await
            .unwrap();
        let fetched = services.cities.get_one("11000").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.city_name, "Belgrade");
    }

    #[tokio::test]
    async fn test_create_rejects_non_numeric_postal_code() {
        let services = services();
        let err = services
            .cities
            .create(CreateCity::new("11A00", "Belgrade"))
            .await
            .unwrap_err();
        assert_eq!(err.violations()[0].message, "Postal code must contain only numbers");
        assert!(services.cities.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_postal_code_conflicts() {
        let services = services();
        services.cities.create(CreateCity::new("21000", "Novi Sad")).await.unwrap();
        let err = services
            .cities
            .create(CreateCity::new("21000", "Novi Sad"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_renames_city() {
        let services = services();
        services.cities.create(CreateCity::new("18000", "Nis")).await.unwrap();
        let updated = services
            .cities
            .update(
                "18000",
                UpdateCity {
                    city_name: Some("Niš".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.postal_code, "18000");
        assert_eq!(updated.city_name, "Niš");
    }

    #[tokio::test]
    async fn test_delete_missing_city_is_not_found() {
        let services = services();
        assert!(services.cities.delete("99999").await.unwrap_err().is_not_found());
    }
}
