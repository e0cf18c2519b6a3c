//! # Pet Repository
//!
//! Single entry point the view model uses to reach both remote APIs. The
//! trait is the seam for substituting a test double.

use crate::app::models::{CatImage, DogImage};
use crate::app::services::cat_api::{CatApiClient, DEFAULT_SEARCH_LIMIT};
use crate::app::services::dog_api::DogApiClient;
use crate::app::services::error::ApiError;
use crate::app::services::http::ClientOptions;
use async_trait::async_trait;

/// Source of cat and dog images
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// One random cat; `ApiError::EmptyResult` when the search comes back empty
    async fn fetch_random_cat(&self) -> Result<CatImage, ApiError>;

    /// One random dog
    async fn fetch_random_dog(&self) -> Result<DogImage, ApiError>;

    /// Up to `limit` random cats
    async fn search_cats(&self, limit: u32) -> Result<Vec<CatImage>, ApiError>;

    /// A specific cat image by its identifier
    async fn cat_by_id(&self, id: &str) -> Result<CatImage, ApiError>;
}

/// Repository backed by the two HTTP clients
#[derive(Debug, Clone)]
pub struct HttpPetRepository {
    cats: CatApiClient,
    dogs: DogApiClient,
}

impl HttpPetRepository {
    pub fn new(cats: CatApiClient, dogs: DogApiClient) -> Self {
        Self { cats, dogs }
    }

    /// Build both clients from endpoint URLs and shared transport options
    pub fn from_endpoints(
        cat_api_url: &str,
        dog_api_url: &str,
        options: &ClientOptions,
    ) -> Result<Self, ApiError> {
        Ok(Self::new(
            CatApiClient::new(cat_api_url, options)?,
            DogApiClient::new(dog_api_url, options)?,
        ))
    }
}

#[async_trait]
impl PetRepository for HttpPetRepository {
    async fn fetch_random_cat(&self) -> Result<CatImage, ApiError> {
        self.cats
            .search_images(DEFAULT_SEARCH_LIMIT)
            .await?
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyResult)
    }

    async fn fetch_random_dog(&self) -> Result<DogImage, ApiError> {
        self.dogs.get_random_image().await
    }

    async fn search_cats(&self, limit: u32) -> Result<Vec<CatImage>, ApiError> {
        self.cats.search_images(limit).await
    }

    async fn cat_by_id(&self, id: &str) -> Result<CatImage, ApiError> {
        self.cats.get_image_by_id(id).await
    }
}
