//! Customer model and the JMBG identity

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{require, Entity};
use crate::{
    error::{AppError, AppResult},
    validation::{JMBG_FORMAT, NOT_BLANK},
};

/// Unique master citizen number: exactly 13 ASCII digits, immutable once parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Jmbg(String);

impl Jmbg {
    pub fn parse(value: &str) -> AppResult<Self> {
        if value.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "JMBG cannot be null or empty.".to_string(),
            ));
        }
        if !JMBG_FORMAT.is_match(value) {
            return Err(AppError::InvalidArgument(format!(
                "JMBG '{}' must contain exactly 13 digits.",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Jmbg {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Jmbg> for String {
    fn from(jmbg: Jmbg) -> Self {
        jmbg.0
    }
}

impl fmt::Display for Jmbg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Library customer
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Customer {
    #[schema(value_type = String, example = "0101990710006")]
    jmbg: Jmbg,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    pub fn new(
        jmbg: Jmbg,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> AppResult<Self> {
        let (first_name, last_name) = (first_name.into(), last_name.into());
        require(&first_name, "First name cannot be null or empty.")?;
        require(&last_name, "Last name cannot be null or empty.")?;
        Ok(Self {
            jmbg,
            first_name,
            last_name,
        })
    }

    pub fn jmbg(&self) -> &Jmbg {
        &self.jmbg
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.jmbg == other.jmbg
    }
}

impl Eq for Customer {}

impl Entity for Customer {
    const NAME: &'static str = "Customer";

    fn key(&self) -> &str {
        self.jmbg.as_str()
    }
}

/// Create customer request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(
        required(message = "JMBG must be 13 digit number"),
        regex(path = *JMBG_FORMAT, message = "JMBG must be 13 digit number")
    )]
    pub jmbg: Option<String>,
    #[validate(
        required(message = "First name must be entered"),
        regex(path = *NOT_BLANK, message = "First name must be entered")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Last name cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Last name cannot be empty string")
    )]
    pub last_name: Option<String>,
}

impl CreateCustomer {
    /// Build the entity; call after `validate`
    pub fn into_customer(self) -> AppResult<Customer> {
        let jmbg = Jmbg::parse(self.jmbg.as_deref().unwrap_or_default())?;
        Customer::new(
            jmbg,
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
        )
    }
}

/// Update customer request; the JMBG itself can never change
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(regex(path = *NOT_BLANK, message = "First name must be entered"))]
    pub first_name: Option<String>,
    #[validate(regex(path = *NOT_BLANK, message = "Last name cannot be empty string"))]
    pub last_name: Option<String>,
}

impl UpdateCustomer {
    pub fn apply_to(self, customer: Customer) -> AppResult<Customer> {
        Customer::new(
            customer.jmbg,
            self.first_name.unwrap_or(customer.first_name),
            self.last_name.unwrap_or(customer.last_name),
        )
    }
}
