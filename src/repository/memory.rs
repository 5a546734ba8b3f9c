//! In-memory store
//!
//! Books and addresses keep only the identity of their author or city; the
//! current record is looked up on every read, as the Postgres joins do.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, Store};
use crate::{
    error::{AppError, AppResult},
    models::{Address, Author, Book, City, Entity},
};

/// Records kept in a map ordered by identity
pub struct MemoryStore<E> {
    rows: RwLock<BTreeMap<String, E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store pre-populated with `entities`
    #[cfg(test)]
    pub(crate) fn with(entities: impl IntoIterator<Item = E>) -> Self {
        let rows = entities
            .into_iter()
            .map(|e| (e.key().to_string(), e))
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    async fn any(&self, f: impl Fn(&E) -> bool) -> bool {
        self.rows.read().await.values().any(f)
    }

    async fn retain(&self, f: impl Fn(&E) -> bool) -> usize {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, e| f(e));
        before - rows.len()
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn get_one(&self, id: &str) -> AppResult<Option<E>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<E>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn create(&self, entity: &E) -> AppResult<E> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(entity.key()) {
            return Err(AppError::Conflict(format!(
                "{} {} already exists",
                E::NAME,
                entity.key()
            )));
        }
        rows.insert(entity.key().to_string(), entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &E, id: &str) -> AppResult<E> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(id) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(E::not_found(id)),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.rows.write().await.remove(id).is_some())
    }
}

/// Authors; deleting one that still has books is refused
pub struct MemoryAuthors {
    authors: Arc<MemoryStore<Author>>,
    books: Arc<MemoryStore<Book>>,
}

#[async_trait]
impl Store<Author> for MemoryAuthors {
    async fn get_one(&self, id: &str) -> AppResult<Option<Author>> {
        self.authors.get_one(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<Author>> {
        self.authors.get_all().await
    }

    async fn create(&self, entity: &Author) -> AppResult<Author> {
        self.authors.create(entity).await
    }

    async fn update(&self, entity: &Author, id: &str) -> AppResult<Author> {
        self.authors.update(entity, id).await
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        if self.books.any(|b| b.author_id.as_deref() == Some(id)).await {
            return Err(AppError::Conflict(format!(
                "Author {} references or is referenced by another record",
                id
            )));
        }
        self.authors.delete(id).await
    }
}

/// Books joined with their current author
pub struct MemoryBooks {
    books: Arc<MemoryStore<Book>>,
    authors: Arc<MemoryStore<Author>>,
}

impl MemoryBooks {
    async fn join(&self, books: Vec<Book>) -> Vec<Book> {
        let authors = self.authors.rows.read().await;
        books
            .into_iter()
            .map(|mut book| {
                book.author = book
                    .author_id
                    .as_deref()
                    .and_then(|id| authors.get(id))
                    .cloned();
                book
            })
            .collect()
    }

    async fn join_one(&self, book: Option<Book>) -> Option<Book> {
        match book {
            Some(book) => self.join(vec![book]).await.pop(),
            None => None,
        }
    }
}

#[async_trait]
impl Store<Book> for MemoryBooks {
    async fn get_one(&self, id: &str) -> AppResult<Option<Book>> {
        let book = self.books.get_one(id).await?;
        Ok(self.join_one(book).await)
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        let books = self.books.get_all().await?;
        Ok(self.join(books).await)
    }

    async fn create(&self, entity: &Book) -> AppResult<Book> {
        let book = self.books.create(entity).await?;
        Ok(self.join_one(Some(book)).await.unwrap_or_else(|| entity.clone()))
    }

    async fn update(&self, entity: &Book, id: &str) -> AppResult<Book> {
        let book = self.books.update(entity, id).await?;
        Ok(self.join_one(Some(book)).await.unwrap_or_else(|| entity.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.books.delete(id).await
    }
}

#[async_trait]
impl BookStore for MemoryBooks {
    async fn find_by_author(&self, author_id: &str) -> AppResult<Vec<Book>> {
        let books: Vec<Book> = self
            .books
            .rows
            .read()
            .await
            .values()
            .filter(|b| b.author_id.as_deref() == Some(author_id))
            .cloned()
            .collect();
        Ok(self.join(books).await)
    }
}

/// Cities; deleting one removes its addresses
pub struct MemoryCities {
    cities: Arc<MemoryStore<City>>,
    addresses: Arc<MemoryStore<Address>>,
}

#[async_trait]
impl Store<City> for MemoryCities {
    async fn get_one(&self, id: &str) -> AppResult<Option<City>> {
        self.cities.get_one(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<City>> {
        self.cities.get_all().await
    }

    async fn create(&self, entity: &City) -> AppResult<City> {
        self.cities.create(entity).await
    }

    async fn update(&self, entity: &City, id: &str) -> AppResult<City> {
        self.cities.update(entity, id).await
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        if !self.cities.delete(id).await? {
            return Ok(false);
        }
        let removed = self.addresses.retain(|a| a.postal_code != id).await;
        tracing::debug!("Removed {} addresses of city {}", removed, id);
        Ok(true)
    }
}

/// Addresses joined with their current city
pub struct MemoryAddresses {
    addresses: Arc<MemoryStore<Address>>,
    cities: Arc<MemoryStore<City>>,
}

impl MemoryAddresses {
    async fn join(&self, addresses: Vec<Address>) -> Vec<Address> {
        let cities = self.cities.rows.read().await;
        addresses
            .into_iter()
            .map(|mut address| {
                if let Some(city) = cities.get(&address.postal_code) {
                    address.city = city.clone();
                }
                address
            })
            .collect()
    }

    async fn join_one(&self, address: Option<Address>) -> Option<Address> {
        match address {
            Some(address) => self.join(vec![address]).await.pop(),
            None => None,
        }
    }
}

#[async_trait]
impl Store<Address> for MemoryAddresses {
    async fn get_one(&self, id: &str) -> AppResult<Option<Address>> {
        let address = self.addresses.get_one(id).await?;
        Ok(self.join_one(address).await)
    }

    async fn get_all(&self) -> AppResult<Vec<Address>> {
        let addresses = self.addresses.get_all().await?;
        Ok(self.join(addresses).await)
    }

    async fn create(&self, entity: &Address) -> AppResult<Address> {
        self.addresses.create(entity).await
    }

    async fn update(&self, entity: &Address, id: &str) -> AppResult<Address> {
        self.addresses.update(entity, id).await
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.addresses.delete(id).await
    }
}

/// Stores sharing their maps so references resolve across entities
pub(crate) struct MemoryTables {
    pub authors: MemoryAuthors,
    pub books: MemoryBooks,
    pub cities: MemoryCities,
    pub addresses: MemoryAddresses,
}

impl MemoryTables {
    pub fn new() -> Self {
        let authors = Arc::new(MemoryStore::<Author>::new());
        let books = Arc::new(MemoryStore::<Book>::new());
        let cities = Arc::new(MemoryStore::<City>::new());
        let addresses = Arc::new(MemoryStore::<Address>::new());
        Self {
            authors: MemoryAuthors {
                authors: authors.clone(),
                books: books.clone(),
            },
            books: MemoryBooks { books, authors },
            cities: MemoryCities {
                cities: cities.clone(),
                addresses: addresses.clone(),
            },
            addresses: MemoryAddresses { addresses, cities },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivo() -> Author {
        Author::new("7", "Ivo", "Andric", None).unwrap()
    }

    #[tokio::test]
    async fn test_create_get_update_delete() {
        let store = MemoryStore::<City>::new();
        let city = City::new("11000", "Belgrade").unwrap();

        store.create(&city).await.unwrap();
        assert_eq!(store.get_one("11000").await.unwrap(), Some(city.clone()));

        let renamed = City::new("11000", "Beograd").unwrap();
        store.update(&renamed, "11000").await.unwrap();
        let fetched = store.get_one("11000").await.unwrap().unwrap();
        assert_eq!(fetched.city_name, "Beograd");

        assert!(store.delete("11000").await.unwrap());
        assert!(!store.delete("11000").await.unwrap());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let store = MemoryStore::with([City::new("11000", "Belgrade").unwrap()]);
        let err = store
            .create(&City::new("11000", "Other").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::<City>::new();
        let err = store
            .update(&City::new("21000", "Novi Sad").unwrap(), "21000")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_author() {
        let tables = MemoryTables::new();
        tables.authors.create(&ivo()).await.unwrap();
        for (isbn, author_id) in [("1", "7"), ("2", "8"), ("3", "7")] {
            let book = Book::new(isbn, "T", "G", true, Some(author_id.into())).unwrap();
            tables.books.create(&book).await.unwrap();
        }
        let books = tables.books.find_by_author("7").await.unwrap();
        let isbns: Vec<&str> = books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["1", "3"]);
        assert_eq!(books[0].author.as_ref().map(|a| a.name.as_str()), Some("Ivo"));
    }

    #[tokio::test]
    async fn test_book_reads_current_author() {
        let tables = MemoryTables::new();
        tables.authors.create(&ivo()).await.unwrap();
        let book = Book::new("111", "T", "G", true, None).unwrap().with_author(ivo());
        tables.books.create(&book).await.unwrap();

        let renamed = Author::new("7", "Ivan", "Andric", None).unwrap();
        tables.authors.update(&renamed, "7").await.unwrap();

        let fetched = tables.books.get_one("111").await.unwrap().unwrap();
        assert_eq!(fetched.author.map(|a| a.name), Some("Ivan".to_string()));
        let listed = tables.books.get_all().await.unwrap();
        assert_eq!(listed[0].author.as_ref().map(|a| a.name.as_str()), Some("Ivan"));
    }

    #[tokio::test]
    async fn test_author_with_books_cannot_be_deleted() {
        let tables = MemoryTables::new();
        tables.authors.create(&ivo()).await.unwrap();
        let book = Book::new("111", "T", "G", true, None).unwrap().with_author(ivo());
        tables.books.create(&book).await.unwrap();

        let err = tables.authors.delete("7").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert!(tables.books.delete("111").await.unwrap());
        assert!(tables.authors.delete("7").await.unwrap());
    }

    #[tokio::test]
    async fn test_city_rename_and_delete_reach_addresses() {
        let tables = MemoryTables::new();
        let city = City::new("11000", "Belgrade").unwrap();
        tables.cities.create(&city).await.unwrap();
        tables
            .addresses
            .create(&Address::new("1", 5, "Knez Mihailova", city).unwrap())
            .await
            .unwrap();

        let renamed = City::new("11000", "Beograd").unwrap();
        tables.cities.update(&renamed, "11000").await.unwrap();
        let fetched = tables.addresses.get_one("1").await.unwrap().unwrap();
        assert_eq!(fetched.city.city_name, "Beograd");

        assert!(tables.cities.delete("11000").await.unwrap());
        assert_eq!(tables.addresses.get_one("1").await.unwrap(), None);
        assert!(tables.addresses.get_all().await.unwrap().is_empty());
    }
}
