//! Shared helpers for integration tests
//!
//! `GatedRepository` hands every repository call a oneshot gate so a test
//! decides exactly when, and in which order, each request resolves.

#![allow(dead_code)]

use async_trait::async_trait;
use pawfetch::{ApiError, CatImage, DogImage, PetRepository};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub type CatGate = oneshot::Sender<Result<CatImage, ApiError>>;
pub type DogGate = oneshot::Sender<Result<DogImage, ApiError>>;

type CatWaiter = oneshot::Receiver<Result<CatImage, ApiError>>;
type DogWaiter = oneshot::Receiver<Result<DogImage, ApiError>>;

#[derive(Default)]
pub struct GatedRepository {
    cats: Mutex<VecDeque<CatWaiter>>,
    dogs: Mutex<VecDeque<DogWaiter>>,
    cat_calls: AtomicUsize,
    dog_calls: AtomicUsize,
}

impl GatedRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a gate for the next cat request
    pub fn gate_cat(&self) -> CatGate {
        let (tx, rx) = oneshot::channel();
        self.cats.lock().unwrap().push_back(rx);
        tx
    }

    /// Queue a gate for the next dog request
    pub fn gate_dog(&self) -> DogGate {
        let (tx, rx) = oneshot::channel();
        self.dogs.lock().unwrap().push_back(rx);
        tx
    }

    /// Yield until `n` cat requests have reached the repository
    pub async fn wait_for_cat_calls(&self, n: usize) {
        wait_for(&self.cat_calls, n).await;
    }

    /// Yield until `n` dog requests have reached the repository
    pub async fn wait_for_dog_calls(&self, n: usize) {
        wait_for(&self.dog_calls, n).await;
    }

    async fn next_cat(&self) -> Result<CatImage, ApiError> {
        let waiter = self
            .cats
            .lock()
            .unwrap()
            .pop_front()
            .expect("no cat response scheduled");
        self.cat_calls.fetch_add(1, Ordering::SeqCst);
        waiter.await.unwrap_or(Err(ApiError::EmptyResult))
    }

    async fn next_dog(&self) -> Result<DogImage, ApiError> {
        let waiter = self
            .dogs
            .lock()
            .unwrap()
            .pop_front()
            .expect("no dog response scheduled");
        self.dog_calls.fetch_add(1, Ordering::SeqCst);
        waiter.await.unwrap_or(Err(ApiError::EmptyResult))
    }
}

async fn wait_for(counter: &AtomicUsize, n: usize) {
    for _ in 0..10_000 {
        if counter.load(Ordering::SeqCst) >= n {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("expected {n} repository call(s)");
}

#[async_trait]
impl PetRepository for GatedRepository {
    async fn fetch_random_cat(&self) -> Result<CatImage, ApiError> {
        self.next_cat().await
    }

    async fn fetch_random_dog(&self) -> Result<DogImage, ApiError> {
        self.next_dog().await
    }

    async fn search_cats(&self, _limit: u32) -> Result<Vec<CatImage>, ApiError> {
        self.next_cat().await.map(|cat| vec![cat])
    }

    async fn cat_by_id(&self, _id: &str) -> Result<CatImage, ApiError> {
        self.next_cat().await
    }
}

pub fn cat(id: &str) -> CatImage {
    CatImage {
        id: id.to_string(),
        url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
        breeds: None,
        width: None,
        height: None,
    }
}

pub fn dog(name: &str) -> DogImage {
    DogImage {
        message: format!("https://images.dog.ceo/breeds/{name}/1.jpg"),
        status: "success".to_string(),
    }
}
