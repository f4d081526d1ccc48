// src/infrastructure/repositories/memory.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repository::{Entity, QueryView, Repository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};
use tokio::sync::RwLock;

/// Process-local store keyed by identifier. Iteration follows ascending ids
/// and identifiers are never reused.
pub struct InMemoryRepository<E: Entity> {
    items: Arc<RwLock<BTreeMap<i64, E>>>,
    next_id: AtomicI64,
}

impl<E: Entity> InMemoryRepository<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Seeds the store with already identified entities.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = E>) -> Self {
        let items: BTreeMap<i64, E> = items
            .into_iter()
            .map(|entity| (entity.id().into(), entity))
            .collect();
        let next_id = items.keys().next_back().map_or(1, |last| last + 1);
        Self {
            items: Arc::new(RwLock::new(items)),
            next_id: AtomicI64::new(next_id),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn query(&self) -> QueryView<E> {
        let items = Arc::clone(&self.items);
        QueryView::deferred(async move { Ok(items.read().await.values().cloned().collect()) })
    }

    async fn get(&self, id: E::Id) -> DomainResult<Option<E>> {
        let key: i64 = id.into();
        Ok(self.items.read().await.get(&key).cloned())
    }

    async fn add(&self, new: E::New) -> DomainResult<E> {
        let id = E::Id::try_from(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let entity = E::materialize(id, new);
        self.items
            .write()
            .await
            .insert(id.into(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &E) -> DomainResult<E> {
        let key: i64 = entity.id().into();
        {
            let mut items = self.items.write().await;
            let slot = items
                .get_mut(&key)
                .ok_or_else(|| DomainError::NotFound(format!("no stored entity with id {key}")))?;
            *slot = entity.clone();
        }
        Ok(entity.clone())
    }

    async fn remove(&self, entity: &E) -> DomainResult<()> {
        let key: i64 = entity.id().into();
        self.items
            .write()
            .await
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("no stored entity with id {key}")))
    }
}
