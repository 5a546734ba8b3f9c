//! Author model and related types

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{book::BookSummary, require, Book, Entity};
use crate::{error::AppResult, validation::NOT_BLANK};

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub author_id: String,
    pub name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

impl Author {
    pub fn new(
        author_id: impl Into<String>,
        name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> AppResult<Self> {
        let (author_id, name, last_name) = (author_id.into(), name.into(), last_name.into());
        require(&author_id, "Author id cannot be null or empty.")?;
        require(&name, "Author name cannot be null or empty.")?;
        require(&last_name, "Author last name cannot be null or empty.")?;
        if let Some(date) = date_of_birth {
            if date > Utc::now().date_naive() {
                return Err(crate::error::AppError::InvalidArgument(
                    "Date of birth cannot be in the future.".to_string(),
                ));
            }
        }

        Ok(Self {
            author_id,
            name,
            last_name,
            date_of_birth,
        })
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.author_id == other.author_id
    }
}

impl Eq for Author {}

impl Entity for Author {
    const NAME: &'static str = "Author";

    fn key(&self) -> &str {
        &self.author_id
    }
}

/// Author as shown in listings and attached to books
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorSummary {
    pub author_id: String,
    pub name: String,
    pub last_name: String,
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            author_id: author.author_id.clone(),
            name: author.name.clone(),
            last_name: author.last_name.clone(),
        }
    }
}

/// Author with the books written by them
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetails {
    pub author_id: String,
    pub name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub books: Vec<BookSummary>,
}

impl AuthorDetails {
    pub fn new(author: Author, books: &[Book]) -> Self {
        Self {
            author_id: author.author_id,
            name: author.name,
            last_name: author.last_name,
            date_of_birth: author.date_of_birth,
            books: books.iter().map(BookSummary::from).collect(),
        }
    }
}

/// Create author request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    /// Generated when omitted
    pub author_id: Option<String>,
    #[validate(
        required(message = "Name cannot be null"),
        regex(path = *NOT_BLANK, message = "Name cannot be empty string")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Last name cannot be null"),
        regex(path = *NOT_BLANK, message = "Last name cannot be empty string")
    )]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl CreateAuthor {
    /// Build the entity; call after `validate`
    pub fn into_author(self, generated_id: String) -> AppResult<Author> {
        Author::new(
            self.author_id.unwrap_or(generated_id),
            self.name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.date_of_birth,
        )
    }
}

/// Update author request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(regex(path = *NOT_BLANK, message = "Name cannot be empty string"))]
    pub name: Option<String>,
    #[validate(regex(path = *NOT_BLANK, message = "Last name cannot be empty string"))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateAuthor {
    /// Overlay the provided fields onto `author`
    pub fn apply_to(self, author: Author) -> AppResult<Author> {
        Author::new(
            author.author_id,
            self.name.unwrap_or(author.name),
            self.last_name.unwrap_or(author.last_name),
            self.date_of_birth.or(author.date_of_birth),
        )
    }
}
