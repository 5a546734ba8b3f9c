//! Admin model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{require, Entity};
use crate::{
    error::AppResult,
    validation::{NON_ZERO_ID, NOT_BLANK},
};

/// Library administrator
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Admin {
    pub admin_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

impl Admin {
    pub fn new(
        admin_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> AppResult<Self> {
        let (admin_id, first_name, last_name) = (admin_id.into(), first_name.into(), last_name.into());
        require(&admin_id, "Admin ID cannot be null or empty.")?;
        require(&first_name, "First name cannot be null or empty.")?;
        require(&last_name, "Last name cannot be null or empty.")?;
        Ok(Self {
            admin_id,
            first_name,
            last_name,
            date_of_birth,
        })
    }
}

impl PartialEq for Admin {
    fn eq(&self, other: &Self) -> bool {
        self.admin_id == other.admin_id
    }
}

impl Eq for Admin {}

impl Entity for Admin {
    const NAME: &'static str = "Admin";

    fn key(&self) -> &str {
        &self.admin_id
    }
}

/// Create admin request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAdmin {
    /// Generated when omitted
    #[validate(regex(path = *NON_ZERO_ID, message = "Id cannot be 0"))]
    pub admin_id: Option<String>,
    #[validate(
        required(message = "Name cannot be null"),
        regex(path = *NOT_BLANK, message = "Name cannot be empty string")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "LastName cannot be null"),
        regex(path = *NOT_BLANK, message = "Last name cannot be empty string")
    )]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl CreateAdmin {
    /// Build the entity; call after `validate`
    pub fn into_admin(self, generated_id: String) -> AppResult<Admin> {
        Admin::new(
            self.admin_id.unwrap_or(generated_id),
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.date_of_birth,
        )
    }
}

/// Update admin request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAdmin {
    #[validate(regex(path = *NOT_BLANK, message = "Name cannot be empty string"))]
    pub first_name: Option<String>,
    #[validate(regex(path = *NOT_BLANK, message = "Last name cannot be empty string"))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateAdmin {
    pub fn apply_to(self, admin: Admin) -> AppResult<Admin> {
        Admin::new(
            admin.admin_id,
            self.first_name.unwrap_or(admin.first_name),
            self.last_name.unwrap_or(admin.last_name),
            self.date_of_birth.or(admin.date_of_birth),
        )
    }
}
