//! # Fetch Management
//!
//! The commands that drive the fetch flows: each one moves its flow to
//! Loading, optionally clears the other flow, and spawns the request.

use crate::app::models::{CatImage, DogImage};
use crate::app::services::ApiError;
use crate::app::view_models::core::{lock, FlowValue, PetViewModel};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;

impl PetViewModel {
    /// Fetch a random cat
    ///
    /// Must be called from within a Tokio runtime. The returned handle
    /// completes once the cat flow has settled (or the response was
    /// discarded as stale); awaiting it is optional.
    pub fn request_cat(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        self.spawn_fetch::<CatImage, _>(async move { repository.fetch_random_cat().await })
    }

    /// Fetch a random dog; same contract as [`PetViewModel::request_cat`]
    pub fn request_dog(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        self.spawn_fetch::<DogImage, _>(async move { repository.fetch_random_dog().await })
    }

    /// Fetch a specific cat image through the cat flow
    pub fn request_cat_by_id(&self, id: impl Into<String>) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let id = id.into();
        self.spawn_fetch::<CatImage, _>(async move { repository.cat_by_id(&id).await })
    }

    /// Start a flow synchronously, then resolve it from a spawned task
    fn spawn_fetch<T, F>(&self, fetch: F) -> JoinHandle<()>
    where
        T: FlowValue,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let generation = self.begin::<T>();
        let inner = Arc::clone(&self.inner);
        let policy = self.settings.resolution_policy;

        tokio::spawn(async move {
            let result = fetch.await;
            if let Err(err) = &result {
                tracing::warn!("{} fetch #{} failed: {}", T::FLOW, generation, err);
            }

            let mut inner = lock(&inner);
            if T::slot(&mut inner).resolve(generation, policy, result) {
                tracing::debug!(
                    "{} flow settled as {} by request #{}",
                    T::FLOW,
                    T::slot(&mut inner).state.phase(),
                    generation
                );
                inner.commit::<T>();
            } else {
                tracing::debug!(
                    "Discarding stale {} response from request #{}",
                    T::FLOW,
                    generation
                );
            }
        })
    }

    /// Move flow `T` to Loading and clear the other flow when flows are exclusive
    fn begin<T: FlowValue>(&self) -> u64 {
        let mut inner = lock(&self.inner);

        let generation = T::slot(&mut inner).begin();
        tracing::debug!("{} flow loading, request #{}", T::FLOW, generation);
        inner.commit::<T>();

        if self.settings.exclusive_flows
            && <T::Other as FlowValue>::slot(&mut inner).state.clear_result()
        {
            tracing::debug!(
                "{} flow cleared by {} request",
                <T::Other as FlowValue>::FLOW,
                T::FLOW
            );
            inner.commit::<T::Other>();
        }

        generation
    }
}
