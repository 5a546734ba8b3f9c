//! Authors service

use std::sync::Arc;

use validator::Validate;

use super::{dump::{record_read, ReadObserver}, find, remove};
use crate::{
    error::AppResult,
    models::{
        author::{AuthorDetails, AuthorSummary, CreateAuthor, UpdateAuthor},
        Author,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
    observer: Arc<dyn ReadObserver>,
}

impl AuthorsService {
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// List all authors
    pub async fn get_all(&self) -> AppResult<Vec<AuthorSummary>> {
        let authors = self.repository.authors.get_all().await?;
        tracing::debug!("Listed {} authors", authors.len());
        Ok(authors.iter().map(AuthorSummary::from).collect())
    }

    /// Get an author with the books they wrote
    pub async fn get_one(&self, author_id: &str) -> AppResult<AuthorDetails> {
        let author = find(self.repository.authors.as_ref(), author_id).await?;
        let books = self.repository.books.find_by_author(author_id).await?;
        tracing::debug!("Author {} has {} books", author_id, books.len());
        record_read(self.observer.as_ref(), &author);
        Ok(AuthorDetails::new(author, &books))
    }

    /// Create an author, generating the id when none is given
    pub async fn create(&self, data: CreateAuthor) -> AppResult<AuthorDetails> {
        data.validate()?;
        let author = data.into_author(uuid::Uuid::new_v4().to_string())?;
        let created = self.repository.authors.create(&author).await?;
        tracing::info!("Author {} created", created.author_id);
        Ok(AuthorDetails::new(created, &[]))
    }

    /// Update an author
    pub async fn update(&self, author_id: &str, data: UpdateAuthor) -> AppResult<AuthorDetails> {
        data.validate()?;
        let existing = find(self.repository.authors.as_ref(), author_id).await?;
        let author = data.apply_to(existing)?;
        let updated = self.repository.authors.update(&author, author_id).await?;
        let books = self.repository.books.find_by_author(author_id).await?;
        tracing::info!("Author {} updated", author_id);
        Ok(AuthorDetails::new(updated, &books))
    }

    /// Delete an author
    pub async fn delete(&self, author_id: &str) -> AppResult<bool> {
        let deleted = remove::<Author, _>(self.repository.authors.as_ref(), author_id).await?;
        tracing::info!("Author {} deleted", author_id);
        Ok(deleted)
    }
}
