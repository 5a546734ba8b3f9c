//! Books repository
//!
//! Standard books and special editions share the `books` table; the `edition`
//! column discriminates them and the special edition columns are null for
//! standard books.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use super::{write_error, BookStore, Store};
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookKind, Entity},
};

const SELECT_BOOKS: &str = r#"
    SELECT b.isbn, b.title, b.genre, b.available, b.author_id, b.edition, b.in_storage, b.autograph,
           a.name AS author_name, a.last_name AS author_last_name, a.date_of_birth AS author_date_of_birth
    FROM books b
    LEFT JOIN authors a ON a.author_id = b.author_id
"#;

#[derive(Debug, FromRow)]
struct BookRow {
    isbn: String,
    title: String,
    genre: String,
    available: bool,
    author_id: Option<String>,
    edition: String,
    in_storage: Option<i32>,
    autograph: Option<String>,
    author_name: Option<String>,
    author_last_name: Option<String>,
    author_date_of_birth: Option<NaiveDate>,
}

impl TryFrom<BookRow> for Book {
    type Error = AppError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let book = match row.edition.as_str() {
            "special" => Book::special_edition(
                row.isbn,
                row.title,
                row.genre,
                row.available,
                row.autograph.unwrap_or_default(),
                row.in_storage.unwrap_or_default(),
                row.author_id.clone(),
            ),
            "standard" => Book::new(row.isbn, row.title, row.genre, row.available, row.author_id.clone()),
            other => Err(AppError::Internal(format!("Unknown book edition '{}'", other))),
        }?;

        let author = match (row.author_id, row.author_name, row.author_last_name) {
            (Some(author_id), Some(name), Some(last_name)) => Some(Author {
                author_id,
                name,
                last_name,
                date_of_birth: row.author_date_of_birth,
            }),
            _ => None,
        };

        Ok(match author {
            Some(author) => book.with_author(author),
            None => book,
        })
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn special_columns(book: &Book) -> (Option<i32>, Option<&str>) {
        match &book.kind {
            BookKind::SpecialEdition {
                autograph,
                in_storage,
            } => (Some(*in_storage), Some(autograph.as_str())),
            BookKind::Standard => (None, None),
        }
    }
}

#[async_trait]
impl Store<Book> for BooksRepository {
    async fn get_one(&self, id: &str) -> AppResult<Option<Book>> {
        let query = format!("{} WHERE b.isbn = $1", SELECT_BOOKS);
        sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Book::try_from)
            .transpose()
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        let query = format!("{} ORDER BY b.title", SELECT_BOOKS);
        sqlx::query_as::<_, BookRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Book::try_from)
            .collect()
    }

    async fn create(&self, book: &Book) -> AppResult<Book> {
        let (in_storage, autograph) = Self::special_columns(book);
        sqlx::query(
            r#"
            INSERT INTO books (isbn, title, genre, available, author_id, edition, in_storage, autograph)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.genre)
        .bind(book.available)
        .bind(&book.author_id)
        .bind(book.kind.as_str())
        .bind(in_storage)
        .bind(autograph)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, Book::NAME, &book.isbn))?;
        Ok(book.clone())
    }

    async fn update(&self, book: &Book, id: &str) -> AppResult<Book> {
        let (in_storage, autograph) = Self::special_columns(book);
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, genre = $3, available = $4, author_id = $5, edition = $6,
                in_storage = $7, autograph = $8
            WHERE isbn = $1
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.genre)
        .bind(book.available)
        .bind(&book.author_id)
        .bind(book.kind.as_str())
        .bind(in_storage)
        .bind(autograph)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, Book::NAME, id))?;
        if result.rows_affected() == 0 {
            return Err(Book::not_found(id));
        }
        Ok(book.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_by_author(&self, author_id: &str) -> AppResult<Vec<Book>> {
        let query = format!("{} WHERE b.author_id = $1 ORDER BY b.title", SELECT_BOOKS);
        sqlx::query_as::<_, BookRow>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Book::try_from)
            .collect()
    }
}
