//! Admins service

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, remove};
use crate::{
    error::AppResult,
    models::{
        admin::{CreateAdmin, UpdateAdmin},
        Admin,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AdminsService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl AdminsService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Admin>> {
        let admins = self.repository.admins.get_all().await?;
        tracing::debug!("Listed {} admins", admins.len());
        Ok(admins)
    }

    pub async fn get_one(&self, admin_id: &str) -> AppResult<Admin> {
        let admin: Admin = find(self.repository.admins.as_ref(), admin_id).await?;
        record_read(self.observer.as_ref(), &admin);
        Ok(admin)
    }

    /// Create an admin, generating the id when none is given
    pub async fn create(&self, data: CreateAdmin) -> AppResult<Admin> {
        data.validate()?;
        let admin = data.into_admin(uuid::Uuid::new_v4().to_string())?;
        let created = self.repository.admins.create(&admin).await?;
        tracing::info!("Admin {} created", created.admin_id);
        Ok(created)
    }

    pub async fn update(&self, admin_id: &str, data: UpdateAdmin) -> AppResult<Admin> {
        data.validate()?;
        let existing: Admin = find(self.repository.admins.as_ref(), admin_id).await?;
        let admin = data.apply_to(existing)?;
        let updated = self.repository.admins.update(&admin, admin_id).await?;
        tracing::info!("Admin {} updated", admin_id);
        Ok(updated)
    }

    pub async fn delete(&self, admin_id: &str) -> AppResult<bool> {
        let deleted = remove::<Admin, _>(self.repository.admins.as_ref(), admin_id).await?;
        tracing::info!("Admin {} deleted", admin_id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::services;

    fn marko(admin_id: Option<&str>) -> CreateAdmin {
        CreateAdmin {
            admin_id: admin_id.map(str::to_string),
            first_name: Some("Marko".into()),
            last_name: Some("Markovic".into()),
            date_of_birth: None,
        }
    }

    #[tokio::test]
    async fn test_create_with_and_without_id() {
        let services = services();
        let explicit = services.admins.create(marko(Some("10"))).await.unwrap();
        assert_eq!(explicit.admin_id, "10");

        let generated = services.admins.create(marko(None)).await.unwrap();
        assert!(uuid::Uuid::parse_str(&generated.admin_id).is_ok());
        assert_eq!(services.admins.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_id_is_rejected() {
        let services = services();
        let err = services.admins.create(marko(Some("0"))).await.unwrap_err();
        assert_eq!(err.violations()[0].message, "Id cannot be 0");
    }

    #[tokio::test]
    async fn test_get_one_is_stable() {
        let services = services();
        services.admins.create(marko(Some("3"))).await.unwrap();
        let first = services.admins.get_one("3").await.unwrap();
        let second = services.admins.get_one("3").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.first_name, second.first_name);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let services = services();
        services.admins.create(marko(Some("4"))).await.unwrap();
        let updated = services
            .admins
            .update(
                "4",
                UpdateAdmin {
                    first_name: Some("Milan".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Milan");

        assert!(services.admins.delete("4").await.unwrap());
        assert!(services.admins.get_one("4").await.unwrap_err().is_not_found());
        assert!(services.admins.delete("4").await.unwrap_err().is_not_found());
    }
}
