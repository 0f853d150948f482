use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Dish;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update). Updates keep the entity's position.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning it if it existed.
    async fn delete(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Dish repository - the page's dish collection.
#[async_trait]
pub trait DishRepository: BaseRepository<Dish, Uuid> {
    /// All dishes in insertion order.
    async fn list(&self) -> Result<Vec<Dish>, RepoError>;

    /// Replace the whole collection, e.g. with freshly fetched data.
    async fn replace_all(&self, dishes: Vec<Dish>) -> Result<(), RepoError>;
}
