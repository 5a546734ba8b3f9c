//! Books service
//!
//! Covers every edition; [`super::special_editions`] narrows the same table
//! down to special editions.

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, remove, resolve};
use crate::{
    error::AppResult,
    models::{
        book::{BookDetails, BookSummary, CreateBook, UpdateBook},
        Author, Book,
    },
    repository::Repository,
    validation::check_isbn,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl BooksService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    async fn author(&self, author_id: &str) -> AppResult<Author> {
        resolve(self.repository.authors.as_ref(), author_id).await
    }

    /// List all books
    pub async fn get_all(&self) -> AppResult<Vec<BookSummary>> {
        let books = self.repository.books.get_all().await?;
        tracing::debug!("Listed {} books", books.len());
        Ok(books.iter().map(BookSummary::from).collect())
    }

    /// Get a book by ISBN
    pub async fn get_one(&self, isbn: &str) -> AppResult<BookDetails> {
        check_isbn(isbn)?;
        let book: Book = find(self.repository.books.as_ref(), isbn).await?;
        record_read(self.observer.as_ref(), &book);
        Ok(BookDetails::from(&book))
    }

    /// Create a standard edition written by `author_id`
    pub async fn create(&self, author_id: &str, data: CreateBook) -> AppResult<BookDetails> {
        data.validate()?;
        check_isbn(data.isbn.as_deref().unwrap_or_default())?;
        let author = self.author(author_id).await?;
        let book = data.into_book(author);
        book.validate()?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Book {} created for author {}", created.isbn, author_id);
        Ok(BookDetails::from(&created))
    }

    /// Update a book, optionally moving it to another author
    pub async fn update(&self, isbn: &str, data: UpdateBook) -> AppResult<BookDetails> {
        check_isbn(isbn)?;
        data.validate()?;
        let existing: Book = find(self.repository.books.as_ref(), isbn).await?;
        let author = match data.author_id.as_deref() {
            Some(author_id) => Some(self.author(author_id).await?),
            None => None,
        };

        let book = data.apply_to(existing, author);
        book.validate()?;
        let updated = self.repository.books.update(&book, isbn).await?;
        tracing::info!("Book {} updated", isbn);
        Ok(BookDetails::from(&updated))
    }

    /// Delete a book
    pub async fn delete(&self, isbn: &str) -> AppResult<bool> {
        check_isbn(isbn)?;
        let deleted = remove::<Book, _>(self.repository.books.as_ref(), isbn).await?;
        tracing::info!("Book {} deleted", isbn);
        Ok(deleted)
    }
}
