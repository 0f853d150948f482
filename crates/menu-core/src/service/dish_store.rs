//! Dish store - the only path that mutates the dish collection.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Dish, DishDraft, Operation};
use crate::error::DomainError;
use crate::ports::{DishRepository, RateLimiter};
use crate::security::sanitize_text;

/// Applies create/update/delete to the collection.
///
/// Each mutation is gated by the rate limiter under its operation key and
/// happens in a single repository call after sanitization, so a rejected or
/// failed operation never leaves a partial change behind.
#[derive(Clone)]
pub struct DishStore {
    repo: Arc<dyn DishRepository>,
    limiter: Arc<dyn RateLimiter>,
}

impl DishStore {
    pub fn new(repo: Arc<dyn DishRepository>, limiter: Arc<dyn RateLimiter>) -> Self {
        Self { repo, limiter }
    }

    pub async fn list(&self) -> Result<Vec<Dish>, DomainError> {
        Ok(self.repo.list().await?)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Dish>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Replace the collection wholesale. Not rate limited.
    pub async fn load(&self, dishes: Vec<Dish>) -> Result<(), DomainError> {
        let count = dishes.len();
        self.repo.replace_all(dishes).await?;
        tracing::info!(count, "Dish collection loaded");
        Ok(())
    }

    pub async fn create(&self, draft: DishDraft) -> Result<Dish, DomainError> {
        self.gate(Operation::Create).await?;

        let dish = Dish::new(sanitize_draft(draft));
        let saved = self.repo.save(dish).await?;

        tracing::info!(dish_id = %saved.id, "Dish created");
        Ok(saved)
    }

    /// Returns `None` (and changes nothing) when no dish has `id`.
    pub async fn update(&self, id: Uuid, draft: DishDraft) -> Result<Option<Dish>, DomainError> {
        self.gate(Operation::Update).await?;

        let draft = sanitize_draft(draft);
        let Some(mut dish) = self.repo.find_by_id(id).await? else {
            tracing::debug!(dish_id = %id, "Update matched no dish");
            return Ok(None);
        };

        dish.apply(draft);
        let saved = self.repo.save(dish).await?;

        tracing::info!(dish_id = %saved.id, "Dish updated");
        Ok(Some(saved))
    }

    /// Returns the removed dish, or `None` when no dish has `id`.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Dish>, DomainError> {
        self.gate(Operation::Delete).await?;

        let removed = self.repo.delete(id).await?;
        match &removed {
            Some(dish) => tracing::info!(dish_id = %dish.id, "Dish deleted"),
            None => tracing::debug!(dish_id = %id, "Delete matched no dish"),
        }
        Ok(removed)
    }

    async fn gate(&self, operation: Operation) -> Result<(), DomainError> {
        if self.limiter.check_limit(operation.key()).await {
            Ok(())
        } else {
            tracing::warn!(operation = %operation, "Rate limit exceeded");
            Err(DomainError::RateLimited { operation })
        }
    }
}

fn sanitize_draft(draft: DishDraft) -> DishDraft {
    DishDraft {
        name: sanitize_text(&draft.name),
        description: sanitize_text(&draft.description),
        ..draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{FixedLimiter, VecRepository, draft};

    fn store(allow: bool) -> (DishStore, Arc<VecRepository>) {
        let repo = Arc::new(VecRepository::default());
        let store = DishStore::new(repo.clone(), Arc::new(FixedLimiter::new(allow)));
        (store, repo)
    }

    #[tokio::test]
    async fn test_create_sanitizes_text_fields() {
        let (store, _) = store(true);
        let mut input = draft("<script>");
        input.description = "Tom's \"best\" 1/2 portion".to_string();

        let dish = store.create(input).await.unwrap();

        assert_eq!(dish.name, "&lt;script&gt;");
        assert_eq!(
            dish.description,
            "Tom&#x27;s &quot;best&quot; 1&#x2F;2 portion"
        );
        assert_eq!(dish.created_at, dish.updated_at);
        assert_eq!(store.list().await.unwrap(), vec![dish]);
    }

    #[tokio::test]
    async fn test_rate_limited_create_does_not_mutate() {
        let (store, repo) = store(false);

        let err = store.create(draft("Soup")).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::RateLimited {
                operation: Operation::Create
            }
        ));
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_created_at() {
        let (store, _) = store(true);
        let created = store.create(draft("Soup")).await.unwrap();

        let mut edit = draft("Soup <of the day>");
        edit.price = 11.5;
        let updated = store.update(created.id, edit).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Soup &lt;of the day&gt;");
        assert_eq!(updated.price, 11.5);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let (store, repo) = store(true);
        store.create(draft("Soup")).await.unwrap();
        let before = repo.snapshot();

        let result = store.update(Uuid::new_v4(), draft("Other")).await.unwrap();

        assert!(result.is_none());
        assert_eq!(repo.snapshot(), before);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (store, repo) = store(true);
        let kept = store.create(draft("Soup")).await.unwrap();

        let removed = store.delete(Uuid::new_v4()).await.unwrap();

        assert!(removed.is_none());
        assert_eq!(repo.snapshot(), vec![kept]);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_dish() {
        let (store, repo) = store(true);
        let dish = store.create(draft("Soup")).await.unwrap();

        let removed = store.delete(dish.id).await.unwrap();

        assert_eq!(removed.map(|d| d.name), Some("Soup".to_string()));
        assert!(repo.snapshot().is_empty());
    }
}
