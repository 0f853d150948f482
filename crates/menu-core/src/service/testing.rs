//! Test doubles for the ports.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Dish, DishCategory, DishDraft};
use crate::error::RepoError;
use crate::ports::{BaseRepository, DishRepository, RateLimitError, RateLimitResult, RateLimiter};

/// Always allows or always rejects.
pub struct FixedLimiter {
    allow: bool,
}

impl FixedLimiter {
    pub fn new(allow: bool) -> Self {
        Self { allow }
    }
}

#[async_trait]
impl RateLimiter for FixedLimiter {
    async fn check(&self, _key: &str) -> Result<RateLimitResult, RateLimitError> {
        Ok(RateLimitResult {
            allowed: self.allow,
            remaining: if self.allow { 1 } else { 0 },
            reset_after: Duration::from_secs(60),
        })
    }
}

#[derive(Default)]
pub struct VecRepository {
    dishes: Mutex<Vec<Dish>>,
}

impl VecRepository {
    pub fn snapshot(&self) -> Vec<Dish> {
        self.dishes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseRepository<Dish, Uuid> for VecRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, RepoError> {
        Ok(self.snapshot().into_iter().find(|d| d.id == id))
    }

    async fn save(&self, entity: Dish) -> Result<Dish, RepoError> {
        let mut dishes = self.dishes.lock().unwrap();
        match dishes.iter_mut().find(|d| d.id == entity.id) {
            Some(slot) => *slot = entity.clone(),
            None => dishes.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Dish>, RepoError> {
        let mut dishes = self.dishes.lock().unwrap();
        let index = dishes.iter().position(|d| d.id == id);
        Ok(index.map(|i| dishes.remove(i)))
    }
}

#[async_trait]
impl DishRepository for VecRepository {
    async fn list(&self) -> Result<Vec<Dish>, RepoError> {
        Ok(self.snapshot())
    }

    async fn replace_all(&self, dishes: Vec<Dish>) -> Result<(), RepoError> {
        *self.dishes.lock().unwrap() = dishes;
        Ok(())
    }
}

pub fn draft(name: &str) -> DishDraft {
    DishDraft {
        name: name.to_string(),
        description: "House special".to_string(),
        price: 9.99,
        category: DishCategory::Soups,
        image_url: String::new(),
    }
}
