use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::object_id::ObjectId;
use crate::domain::product::{NewProduct, Product, ProductListQuery, ProductUpdate};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;
pub mod user;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Apply one classified update to the record with `product_id`, stamping
    /// `last_modified_at`. Exactly one store mutation; zero matched records
    /// reports [`errors::RepositoryError::NotFound`].
    fn update_product(
        &self,
        product_id: &ObjectId,
        updates: &ProductUpdate,
        last_modified_at: NaiveDateTime,
    ) -> RepositoryResult<()>;
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
