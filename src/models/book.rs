//! Book model, special editions and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{author::AuthorSummary, require, Author, Entity};
use crate::{
    error::{AppError, AppResult},
    validation::NOT_BLANK,
};

const NOT_SPECIAL_EDITION: &str = "This is not special edition book. Autograph IS NOT available";

/// Edition of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "edition", rename_all = "snake_case")]
pub enum BookKind {
    Standard,
    SpecialEdition { autograph: String, in_storage: i32 },
}

impl BookKind {
    /// Value stored in the `edition` column
    pub fn as_str(&self) -> &'static str {
        match self {
            BookKind::Standard => "standard",
            BookKind::SpecialEdition { .. } => "special",
        }
    }
}

/// Book record. Identity is the ISBN.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Book {
    #[validate(regex(path = *NOT_BLANK, message = "ISBN cannot be empty string"))]
    pub isbn: String,
    #[validate(regex(path = *NOT_BLANK, message = "Title cannot be empty string"))]
    pub title: String,
    #[validate(regex(path = *NOT_BLANK, message = "Genre cannot be empty string"))]
    pub genre: String,
    pub available: bool,
    #[validate(
        required(message = "Author id must be entered"),
        regex(path = *NOT_BLANK, message = "Author id must be entered")
    )]
    pub author_id: Option<String>,
    pub author: Option<Author>,
    #[serde(flatten)]
    pub kind: BookKind,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        available: bool,
        author_id: Option<String>,
    ) -> AppResult<Self> {
        let (isbn, title) = (isbn.into(), title.into());
        require(&isbn, "ISBN cannot be null or empty.")?;
        require(&title, "Title cannot be null or empty.")?;

        Ok(Self {
            isbn,
            title,
            genre: genre.into(),
            available,
            author_id,
            author: None,
            kind: BookKind::Standard,
        })
    }

    pub fn special_edition(
        isbn: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        available: bool,
        autograph: impl Into<String>,
        in_storage: i32,
        author_id: Option<String>,
    ) -> AppResult<Self> {
        let mut book = Self::new(isbn, title, genre, available, author_id)?;
        let autograph = autograph.into();
        require(&autograph, "Autograph cannot be null or empty.")?;
        if in_storage < 0 {
            return Err(AppError::InvalidArgument(
                "InStorage cannot be negative.".to_string(),
            ));
        }
        book.kind = BookKind::SpecialEdition {
            autograph,
            in_storage,
        };
        Ok(book)
    }

    /// Attach the resolved author
    pub fn with_author(mut self, author: Author) -> Self {
        self.author_id = Some(author.author_id.clone());
        self.author = Some(author);
        self
    }

    pub fn is_special_edition(&self) -> bool {
        matches!(self.kind, BookKind::SpecialEdition { .. })
    }

    pub fn in_storage(&self) -> Option<i32> {
        match self.kind {
            BookKind::SpecialEdition { in_storage, .. } => Some(in_storage),
            BookKind::Standard => None,
        }
    }

    /// Printable description of the book
    pub fn details(&self) -> String {
        let available = if self.available { "True" } else { "False" };
        match &self.kind {
            BookKind::Standard => format!(
                "ISBN: {}\n Title: {}\n Genre: {}\n Available: {} \n Special edition:NO",
                self.isbn, self.title, self.genre, available
            ),
            BookKind::SpecialEdition { autograph, .. } => format!(
                "ISBN: {}\n Title: {}\n Genre: {}\n Available: {}\n Special edition:YES\n Autograph: {}",
                self.isbn, self.title, self.genre, available, autograph
            ),
        }
    }

    pub fn autograph(&self) -> &str {
        match &self.kind {
            BookKind::SpecialEdition { autograph, .. } => autograph,
            BookKind::Standard => NOT_SPECIAL_EDITION,
        }
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Entity for Book {
    const NAME: &'static str = "Book";

    fn key(&self) -> &str {
        &self.isbn
    }
}

/// Book as shown in listings (ISBN and author excluded)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookSummary {
    pub title: String,
    pub genre: String,
    pub available: bool,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            genre: book.genre.clone(),
            available: book.available,
        }
    }
}

/// Full book representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetails {
    pub isbn: String,
    pub title: String,
    pub genre: String,
    pub available: bool,
    pub special_edition: bool,
    pub author: Option<AuthorSummary>,
    pub details: String,
}

impl From<&Book> for BookDetails {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            genre: book.genre.clone(),
            available: book.available,
            special_edition: book.is_special_edition(),
            author: book.author.as_ref().map(AuthorSummary::from),
            details: book.details(),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(
        required(message = "ISBN cannot be empty string"),
        regex(path = *NOT_BLANK, message = "ISBN cannot be empty string")
    )]
    pub isbn: Option<String>,
    #[validate(
        required(message = "Title cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Title cannot be empty string")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Genre cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Genre cannot be empty string")
    )]
    pub genre: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl CreateBook {
    /// Map onto a standard edition written by `author`; call after `validate`
    pub fn into_book(self, author: Author) -> Book {
        Book {
            isbn: self.isbn.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            available: self.available,
            author_id: None,
            author: None,
            kind: BookKind::Standard,
        }
        .with_author(author)
    }
}

/// Update book request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(regex(path = *NOT_BLANK, message = "Title cannot be empty string"))]
    pub title: Option<String>,
    #[validate(regex(path = *NOT_BLANK, message = "Genre cannot be empty string"))]
    pub genre: Option<String>,
    pub available: Option<bool>,
    /// Move the book to another author
    #[validate(regex(path = *NOT_BLANK, message = "Author id must be entered"))]
    pub author_id: Option<String>,
}

impl UpdateBook {
    /// Overlay the provided fields onto `book`; the new author, if any, is resolved by the caller
    pub fn apply_to(self, mut book: Book, author: Option<Author>) -> Book {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(available) = self.available {
            book.available = available;
        }
        match author {
            Some(author) => book.with_author(author),
            None => book,
        }
    }
}

/// Special edition as shown in listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpecialEditionSummary {
    pub title: String,
    pub genre: String,
    pub available: bool,
    pub in_storage: i32,
}

impl From<&Book> for SpecialEditionSummary {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            genre: book.genre.clone(),
            available: book.available,
            in_storage: book.in_storage().unwrap_or_default(),
        }
    }
}

/// Full special edition representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpecialEditionDetails {
    pub isbn: String,
    pub title: String,
    pub genre: String,
    pub available: bool,
    pub autograph: String,
    pub in_storage: i32,
    pub author: Option<AuthorSummary>,
    pub details: String,
}

impl From<&Book> for SpecialEditionDetails {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            genre: book.genre.clone(),
            available: book.available,
            autograph: book.autograph().to_string(),
            in_storage: book.in_storage().unwrap_or_default(),
            author: book.author.as_ref().map(AuthorSummary::from),
            details: book.details(),
        }
    }
}

/// Create special edition request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSpecialEdition {
    #[validate(
        required(message = "ISBN cannot be empty string"),
        regex(path = *NOT_BLANK, message = "ISBN cannot be empty string")
    )]
    pub isbn: Option<String>,
    #[validate(
        required(message = "Title cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Title cannot be empty string")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Genre cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Genre cannot be empty string")
    )]
    pub genre: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[validate(
        required(message = "Autograph cannot be empty string"),
        regex(path = *NOT_BLANK, message = "Autograph cannot be empty string")
    )]
    pub autograph: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "InStorage cannot be negative"))]
    pub in_storage: i32,
}

impl CreateSpecialEdition {
    /// Map onto a special edition written by `author`; call after `validate`
    pub fn into_book(self, author: Author) -> Book {
        Book {
            isbn: self.isbn.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            available: self.available,
            author_id: None,
            author: None,
            kind: BookKind::SpecialEdition {
                autograph: self.autograph.unwrap_or_default(),
                in_storage: self.in_storage,
            },
        }
        .with_author(author)
    }
}

/// Update special edition request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSpecialEdition {
    #[validate(regex(path = *NOT_BLANK, message = "Title cannot be empty string"))]
    pub title: Option<String>,
    #[validate(regex(path = *NOT_BLANK, message = "Genre cannot be empty string"))]
    pub genre: Option<String>,
    pub available: Option<bool>,
    #[validate(regex(path = *NOT_BLANK, message = "Autograph cannot be empty string"))]
    pub autograph: Option<String>,
    #[validate(range(min = 0, message = "InStorage cannot be negative"))]
    pub in_storage: Option<i32>,
}

impl UpdateSpecialEdition {
    /// Overlay the provided fields onto a special edition
    pub fn apply_to(self, mut book: Book) -> Book {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(available) = self.available {
            book.available = available;
        }
        if let BookKind::SpecialEdition {
            autograph,
            in_storage,
        } = &mut book.kind
        {
            if let Some(value) = self.autograph {
                *autograph = value;
            }
            if let Some(value) = self.in_storage {
                *in_storage = value;
            }
        }
        book
    }
}
