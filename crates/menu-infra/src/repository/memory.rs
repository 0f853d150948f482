//! In-memory dish repository - the page's dish collection.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use menu_core::domain::Dish;
use menu_core::error::RepoError;
use menu_core::ports::{BaseRepository, DishRepository};

/// Dish collection kept in insertion order behind an async RwLock.
///
/// Note: Data is lost when the session ends.
pub struct InMemoryDishRepository {
    dishes: RwLock<Vec<Dish>>,
}

impl InMemoryDishRepository {
    pub fn new() -> Self {
        Self {
            dishes: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryDishRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Dish, Uuid> for InMemoryDishRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, RepoError> {
        let dishes = self.dishes.read().await;
        Ok(dishes.iter().find(|d| d.id == id).cloned())
    }

    async fn save(&self, entity: Dish) -> Result<Dish, RepoError> {
        let mut dishes = self.dishes.write().await;

        match dishes.iter_mut().find(|d| d.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => dishes.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Dish>, RepoError> {
        let mut dishes = self.dishes.write().await;
        let removed = dishes
            .iter()
            .position(|d| d.id == id)
            .map(|index| dishes.remove(index));
        Ok(removed)
    }
}

#[async_trait]
impl DishRepository for InMemoryDishRepository {
    async fn list(&self) -> Result<Vec<Dish>, RepoError> {
        Ok(self.dishes.read().await.clone())
    }

    async fn replace_all(&self, dishes: Vec<Dish>) -> Result<(), RepoError> {
        *self.dishes.write().await = dishes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use menu_core::domain::{DishCategory, DishDraft};

    use super::*;

    fn dish(name: &str) -> Dish {
        Dish::new(DishDraft {
            name: name.to_string(),
            description: "desc".to_string(),
            price: 5.0,
            category: DishCategory::Appetizers,
            image_url: String::new(),
        })
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryDishRepository::new();
        let saved = repo.save(dish("Bruschetta")).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_existing_keeps_position() {
        let repo = InMemoryDishRepository::new();
        let first = repo.save(dish("A")).await.unwrap();
        repo.save(dish("B")).await.unwrap();

        let mut renamed = first.clone();
        renamed.name = "A2".to_string();
        repo.save(renamed).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["A2", "B"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryDishRepository::new();
        let saved = repo.save(dish("A")).await.unwrap();

        assert_eq!(repo.delete(Uuid::new_v4()).await.unwrap(), None);
        assert_eq!(repo.delete(saved.id).await.unwrap(), Some(saved));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_all() {
        let repo = InMemoryDishRepository::new();
        repo.save(dish("old")).await.unwrap();
        repo.replace_all(vec![dish("x"), dish("y")]).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
