// tests/support/mocks/repos.rs
use async_trait::async_trait;
use crossblog::domain::errors::{DomainError, DomainResult};
use crossblog::domain::repository::{Entity, QueryView, Repository};
use crossblog::infrastructure::repositories::InMemoryRepository;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store that counts the writes it receives.
pub struct RecordingRepository<E: Entity> {
    inner: InMemoryRepository<E>,
    adds: AtomicUsize,
    updates: AtomicUsize,
    removes: AtomicUsize,
}

impl<E: Entity> RecordingRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: impl IntoIterator<Item = E>) -> Self {
        Self {
            inner: InMemoryRepository::with_items(items),
            adds: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
        }
    }

    pub fn adds(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.adds() + self.updates() + self.removes()
    }

    pub async fn len(&self) -> usize {
        self.inner.query().to_vec().await.unwrap().len()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for RecordingRepository<E> {
    fn query(&self) -> QueryView<E> {
        self.inner.query()
    }

    async fn get(&self, id: E::Id) -> DomainResult<Option<E>> {
        self.inner.get(id).await
    }

    async fn add(&self, new: E::New) -> DomainResult<E> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.inner.add(new).await
    }

    async fn update(&self, entity: &E) -> DomainResult<E> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(entity).await
    }

    async fn remove(&self, entity: &E) -> DomainResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(entity).await
    }
}

/// Store whose every operation fails as if the backend went away.
pub struct FailingRepository<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> FailingRepository<E> {
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

fn store_down() -> DomainError {
    DomainError::Persistence("store unavailable".into())
}

#[async_trait]
impl<E: Entity> Repository<E> for FailingRepository<E> {
    fn query(&self) -> QueryView<E> {
        QueryView::deferred(async { Err(store_down()) })
    }

    async fn get(&self, _id: E::Id) -> DomainResult<Option<E>> {
        Err(store_down())
    }

    async fn add(&self, _new: E::New) -> DomainResult<E> {
        Err(store_down())
    }

    async fn update(&self, _entity: &E) -> DomainResult<E> {
        Err(store_down())
    }

    async fn remove(&self, _entity: &E) -> DomainResult<()> {
        Err(store_down())
    }
}
