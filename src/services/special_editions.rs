//! Special editions service

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, resolve};
use crate::{
    error::AppResult,
    models::{
        book::{CreateSpecialEdition, SpecialEditionDetails, SpecialEditionSummary, UpdateSpecialEdition},
        Author, Book, Entity,
    },
    repository::Repository,
    validation::check_isbn,
};

#[derive(Clone)]
pub struct SpecialEditionsService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl SpecialEditionsService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// A standard book stored under `isbn` counts as missing
    async fn find_special(&self, isbn: &str) -> AppResult<Book> {
        let book: Book = find(self.repository.books.as_ref(), isbn).await?;
        if !book.is_special_edition() {
            return Err(Book::not_found(isbn));
        }
        Ok(book)
    }

    /// List special editions only
    pub async fn get_all(&self) -> AppResult<Vec<SpecialEditionSummary>> {
        let books = self.repository.books.get_all().await?;
        let editions: Vec<SpecialEditionSummary> = books
            .iter()
            .filter(|b| b.is_special_edition())
            .map(SpecialEditionSummary::from)
            .collect();
        tracing::debug!("Listed {} special editions", editions.len());
        Ok(editions)
    }

    /// Get a special edition by ISBN
    pub async fn get_one(&self, isbn: &str) -> AppResult<SpecialEditionDetails> {
        check_isbn(isbn)?;
        let book = self.find_special(isbn).await?;
        record_read(self.observer.as_ref(), &book);
        Ok(SpecialEditionDetails::from(&book))
    }

    /// Create a special edition written by `author_id`
    pub async fn create(
        &self,
        author_id: &str,
        data: CreateSpecialEdition,
    ) -> AppResult<SpecialEditionDetails> {
        data.validate()?;
        check_isbn(data.isbn.as_deref().unwrap_or_default())?;
        let author: Author = resolve(self.repository.authors.as_ref(), author_id).await?;
        let book = data.into_book(author);
        book.validate()?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!(
            "Special edition {} created for author {}",
            created.isbn,
            author_id
        );
        Ok(SpecialEditionDetails::from(&created))
    }

    /// Update a special edition
    pub async fn update(
        &self,
        isbn: &str,
        data: UpdateSpecialEdition,
    ) -> AppResult<SpecialEditionDetails> {
        check_isbn(isbn)?;
        data.validate()?;
        let existing = self.find_special(isbn).await?;
        let book = data.apply_to(existing);
        book.validate()?;
        let updated = self.repository.books.update(&book, isbn).await?;
        tracing::info!("Special edition {} updated", isbn);
        Ok(SpecialEditionDetails::from(&updated))
    }

    /// Delete a special edition
    pub async fn delete(&self, isbn: &str) -> AppResult<bool> {
        check_isbn(isbn)?;
        self.find_special(isbn).await?;
        if !self.repository.books.delete(isbn).await? {
            return Err(Book::not_found(isbn));
        }
        tracing::info!("Special edition {} deleted", isbn);
        Ok(true)
    }
}
