// src/domain/repository.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::{
    Stream, StreamExt, TryStreamExt, future,
    stream::{self, BoxStream},
};
use std::{fmt, future::Future};

/// A stored resource addressable by a storage-assigned identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy
        + Eq
        + fmt::Debug
        + Into<i64>
        + TryFrom<i64, Error = DomainError>
        + Send
        + Sync
        + 'static;
    /// Field values of an instance that has not been stored yet.
    type New: Send + 'static;

    fn id(&self) -> Self::Id;

    fn materialize(id: Self::Id, new: Self::New) -> Self;
}

/// Lazily evaluated, read-only view over the stored instances of an entity.
///
/// Nothing is read from the backing store until [`QueryView::to_vec`] drives
/// the underlying stream; filters compose without touching the store.
pub struct QueryView<E> {
    source: BoxStream<'static, DomainResult<E>>,
}

impl<E: Send + 'static> QueryView<E> {
    fn from_stream<S>(source: S) -> Self
    where
        S: Stream<Item = DomainResult<E>> + Send + 'static,
    {
        Self {
            source: source.boxed(),
        }
    }

    /// Defers `load` until the view is first polled.
    #[must_use]
    pub fn deferred<F>(load: F) -> Self
    where
        F: Future<Output = DomainResult<Vec<E>>> + Send + 'static,
    {
        let source = stream::once(load)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<E, DomainError>)))
            .try_flatten();
        Self::from_stream(source)
    }

    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + 'static,
    {
        Self {
            source: self
                .source
                .try_filter(move |item| future::ready(predicate(item)))
                .boxed(),
        }
    }

    /// Drives the view to completion.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the backing store.
    pub async fn to_vec(self) -> DomainResult<Vec<E>> {
        self.source.try_collect().await
    }
}

/// Persistence gateway for a single entity type.
///
/// Every async operation fails with [`DomainError::Persistence`] when the
/// backing store does.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    fn query(&self) -> QueryView<E>;

    /// # Errors
    ///
    /// Store faults only; a missing entity is `Ok(None)`.
    async fn get(&self, id: E::Id) -> DomainResult<Option<E>>;

    /// # Errors
    ///
    /// Store faults, or a constraint the new instance violates.
    async fn add(&self, new: E::New) -> DomainResult<E>;

    /// # Errors
    ///
    /// Fails with [`DomainError::NotFound`] when the identifier is unknown.
    async fn update(&self, entity: &E) -> DomainResult<E>;

    /// # Errors
    ///
    /// Fails with [`DomainError::NotFound`] when the identifier is unknown.
    async fn remove(&self, entity: &E) -> DomainResult<()>;
}
