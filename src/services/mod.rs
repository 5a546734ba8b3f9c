//! Business logic services

pub mod addresses;
pub mod admins;
pub mod authors;
pub mod books;
pub mod cities;
pub mod customers;
pub mod dump;
pub mod special_editions;

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Entity,
    repository::{Repository, Store},
};

use dump::ReadObserver;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub special_editions: special_editions::SpecialEditionsService,
    pub cities: cities::CitiesService,
    pub addresses: addresses::AddressesService,
    pub customers: customers::CustomersService,
    pub admins: admins::AdminsService,
}

impl Services {
    /// Create all services over the given repository, reporting reads to `observer`
    pub fn new(repository: Repository, observer: Arc<dyn ReadObserver>) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.clone(), observer.clone()),
            books: books::BooksService::new(repository.clone(), observer.clone()),
            special_editions: special_editions::SpecialEditionsService::new(
                repository.clone(),
                observer.clone(),
            ),
            cities: cities::CitiesService::new(repository.clone(), observer.clone()),
            addresses: addresses::AddressesService::new(repository.clone(), observer.clone()),
            customers: customers::CustomersService::new(repository.clone(), observer.clone()),
            admins: admins::AdminsService::new(repository, observer),
        }
    }
}

/// Load a record, `NotFound` if absent
pub(crate) async fn find<E, S>(store: &S, id: &str) -> AppResult<E>
where
    E: Entity,
    S: Store<E> + ?Sized,
{
    store.get_one(id).await?.ok_or_else(|| E::not_found(id))
}

/// Load a record referenced by another one, `MissingReference` if absent
pub(crate) async fn resolve<E, S>(store: &S, id: &str) -> AppResult<E>
where
    E: Entity,
    S: Store<E> + ?Sized,
{
    store.get_one(id).await?.ok_or_else(|| E::missing_reference(id))
}

/// Delete an existing record, `NotFound` if absent
pub(crate) async fn remove<E, S>(store: &S, id: &str) -> AppResult<bool>
where
    E: Entity,
    S: Store<E> + ?Sized,
{
    find::<E, S>(store, id).await?;
    if !store.delete(id).await? {
        return Err(E::not_found(id));
    }
    Ok(true)
}
