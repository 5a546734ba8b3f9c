//! Address model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{require, City, Entity};
use crate::{
    error::{AppError, AppResult},
    validation::{NOT_BLANK, POSITIVE_INTEGER},
};

/// Street address inside a city
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: String,
    pub number: i32,
    pub street: String,
    pub city: City,
    /// Copy of the city's postal code
    pub postal_code: String,
}

impl Address {
    pub fn new(
        id: impl Into<String>,
        number: i32,
        street: impl Into<String>,
        city: City,
    ) -> AppResult<Self> {
        let (id, street) = (id.into(), street.into());
        require(&id, "Id cannot be null or empty.")?;
        if number <= 0 {
            return Err(AppError::InvalidArgument(
                "Number must be greater than zero.".to_string(),
            ));
        }
        require(&street, "Street cannot be null or empty.")?;

        Ok(Self {
            id,
            number,
            street,
            postal_code: city.postal_code.clone(),
            city,
        })
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Address {}

impl Entity for Address {
    const NAME: &'static str = "Address";

    fn key(&self) -> &str {
        &self.id
    }
}

/// Create address request; the city comes from the route
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAddress {
    #[validate(
        required(message = "Id must be greater than 1"),
        regex(path = *POSITIVE_INTEGER, message = "Id must be greater than 1")
    )]
    pub id: Option<String>,
    #[validate(
        required(message = "Number must be entered"),
        range(min = 0, message = "Number must be entered")
    )]
    pub number: Option<i32>,
    #[validate(
        required(message = "Street name cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Street name cannot be empty string")
    )]
    pub street: Option<String>,
}

impl CreateAddress {
    /// Build the entity inside `city`; call after `validate`
    pub fn into_address(self, city: City) -> AppResult<Address> {
        Address::new(
            self.id.unwrap_or_default(),
            self.number.unwrap_or_default(),
            self.street.unwrap_or_default(),
            city,
        )
    }
}

/// Update address request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAddress {
    #[validate(range(min = 0, message = "Number must be entered"))]
    pub number: Option<i32>,
    #[validate(regex(path = *NOT_BLANK, message = "Street name cannot be empty string"))]
    pub street: Option<String>,
}

impl UpdateAddress {
    /// Overlay the provided fields, optionally moving the address to `city`
    pub fn apply_to(self, address: Address, city: Option<City>) -> AppResult<Address> {
        Address::new(
            address.id,
            self.number.unwrap_or(address.number),
            self.street.unwrap_or(address.street),
            city.unwrap_or(address.city),
        )
    }
}

/// Query parameters for address updates
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AddressQuery {
    /// Move the address to the city with this postal code
    pub postal_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belgrade() -> City {
        City::new("11000", "Belgrade").unwrap()
    }

    fn fields(data: &CreateAddress) -> Vec<String> {
        match data.validate() {
            Ok(()) => vec![],
            Err(e) => AppError::from(e)
                .violations()
                .iter()
                .map(|v| v.field.clone())
                .collect(),
        }
    }

    #[test]
    fn test_validator_all_ok() {
        let data = CreateAddress {
            id: Some("1".into()),
            number: Some(5),
            street: Some("Main St".into()),
        };
        assert!(fields(&data).is_empty());
    }

    #[test]
    fn test_validator_negative_number() {
        let data = CreateAddress {
            id: Some("1".into()),
            number: Some(-10),
            street: Some("Milutina Stojanovica".into()),
        };
        assert_eq!(fields(&data), vec!["number"]);
    }

    #[test]
    fn test_validator_street_empty_or_null() {
        for street in [Some(String::new()), None] {
            let data = CreateAddress {
                id: Some("1".into()),
                number: Some(1),
                street,
            };
            assert_eq!(fields(&data), vec!["street"]);
        }
    }

    #[test]
    fn test_validator_id_must_be_positive_integer() {
        for id in ["0", "abc", ""] {
            let data = CreateAddress {
                id: Some(id.into()),
                number: Some(1),
                street: Some("Main St".into()),
            };
            assert_eq!(fields(&data), vec!["id"], "id {:?}", id);
        }
    }

    #[test]
    fn test_constructor_is_stricter_than_validator() {
        let data = CreateAddress {
            id: Some("1".into()),
            number: Some(0),
            street: Some("Main St".into()),
        };
        assert!(fields(&data).is_empty());
        assert!(matches!(
            data.into_address(belgrade()),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_constructor_copies_postal_code() {
        let address = Address::new("1", 5, "Knez Mihailova", belgrade()).unwrap();
        assert_eq!(address.postal_code, "11000");
        assert_eq!(address.city.city_name, "Belgrade");
    }

    #[test]
    fn test_update_moves_city() {
        let address = Address::new("1", 5, "Knez Mihailova", belgrade()).unwrap();
        let novi_sad = City::new("21000", "Novi Sad").unwrap();
        let moved = UpdateAddress::default()
            .apply_to(address, Some(novi_sad))
            .unwrap();
        assert_eq!(moved.postal_code, "21000");
        assert_eq!(moved.street, "Knez Mihailova");
    }
}
