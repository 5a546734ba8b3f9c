//! Repository layer for persistence
//!
//! Every entity is persisted through a key-based [`Store`]. Two backends are
//! provided: PostgreSQL tables through `sqlx`, and an in-memory map used for
//! local runs and tests.

pub mod addresses;
pub mod admins;
pub mod authors;
pub mod books;
pub mod cities;
pub mod customers;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Address, Admin, Author, Book, City, Customer},
};

/// Key-based persistence for one entity type
#[async_trait]
pub trait Store<E>: Send + Sync {
    async fn get_one(&self, id: &str) -> AppResult<Option<E>>;

    async fn get_all(&self) -> AppResult<Vec<E>>;

    /// Insert a new record, `Conflict` if the identity is taken
    async fn create(&self, entity: &E) -> AppResult<E>;

    /// Overwrite the record stored under `id`, `NotFound` if there is none
    async fn update(&self, entity: &E, id: &str) -> AppResult<E>;

    /// Returns whether a record was removed
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Book persistence, including lookups by author
#[async_trait]
pub trait BookStore: Store<Book> {
    async fn find_by_author(&self, author_id: &str) -> AppResult<Vec<Book>>;
}

/// Main repository struct holding one store per entity
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn Store<Author>>,
    pub books: Arc<dyn BookStore>,
    pub cities: Arc<dyn Store<City>>,
    pub addresses: Arc<dyn Store<Address>>,
    pub customers: Arc<dyn Store<Customer>>,
    pub admins: Arc<dyn Store<Admin>>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(authors::AuthorsRepository::new(pool.clone())),
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            cities: Arc::new(cities::CitiesRepository::new(pool.clone())),
            addresses: Arc::new(addresses::AddressesRepository::new(pool.clone())),
            customers: Arc::new(customers::CustomersRepository::new(pool.clone())),
            admins: Arc::new(admins::AdminsRepository::new(pool)),
        }
    }

    /// Create an empty repository kept in process memory
    pub fn in_memory() -> Self {
        let tables = memory::MemoryTables::new();
        Self {
            authors: Arc::new(tables.authors),
            books: Arc::new(tables.books),
            cities: Arc::new(tables.cities),
            addresses: Arc::new(tables.addresses),
            customers: Arc::new(memory::MemoryStore::<Customer>::new()),
            admins: Arc::new(memory::MemoryStore::<Admin>::new()),
        }
    }
}

/// Translate constraint violations on writes into domain errors
pub(crate) fn write_error(err: sqlx::Error, what: &str, id: &str) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return AppError::Conflict(format!("{} {} already exists", what, id));
        }
        if db.is_foreign_key_violation() {
            return AppError::Conflict(format!(
                "{} {} references or is referenced by another record",
                what, id
            ));
        }
    }
    AppError::Database(err)
}
