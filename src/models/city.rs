//! City model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{require, Entity};
use crate::{
    error::AppResult,
    validation::{DIGITS_ONLY, NOT_BLANK},
};

/// City identified by its postal code
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct City {
    pub postal_code: String,
    pub city_name: String,
}

impl City {
    pub fn new(postal_code: impl Into<String>, city_name: impl Into<String>) -> AppResult<Self> {
        let (postal_code, city_name) = (postal_code.into(), city_name.into());
        require(&postal_code, "Postal code cannot be null or empty.")?;
        require(&city_name, "City name cannot be null or empty.")?;
        Ok(Self {
            postal_code,
            city_name,
        })
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.postal_code == other.postal_code
    }
}

impl Eq for City {}

impl Entity for City {
    const NAME: &'static str = "City";

    fn key(&self) -> &str {
        &self.postal_code
    }
}

/// Create city request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCity {
    #[validate(
        required(message = "Postal code cannot be null"),
        length(min = 1, message = "Postal code is required"),
        regex(path = *DIGITS_ONLY, message = "Postal code must contain only numbers")
    )]
    pub postal_code: Option<String>,
    #[validate(
        required(message = "City name cannot be empty string"),
        regex(path = *NOT_BLANK, message = "City name cannot be empty string")
    )]
    pub city_name: Option<String>,
}

impl CreateCity {
    pub fn new(postal_code: &str, city_name: &str) -> Self {
        Self {
            postal_code: Some(postal_code.to_string()),
            city_name: Some(city_name.to_string()),
        }
    }

    /// Build the entity; call after `validate`
    pub fn into_city(self) -> AppResult<City> {
        City::new(
            self.postal_code.unwrap_or_default(),
            self.city_name.unwrap_or_default(),
        )
    }
}

/// Update city request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCity {
    #[validate(regex(path = *NOT_BLANK, message = "City name cannot be empty string"))]
    pub city_name: Option<String>,
}

impl UpdateCity {
    pub fn apply_to(self, city: City) -> AppResult<City> {
        City::new(city.postal_code, self.city_name.unwrap_or(city.city_name))
    }
}
