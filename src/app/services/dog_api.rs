//! # Dog API Client
//!
//! Typed operations against Dog CEO (`https://dog.ceo/api/`).

use crate::app::models::DogImage;
use crate::app::services::error::ApiError;
use crate::app::services::http::{ClientOptions, JsonClient};

/// Base URL of the Dog CEO API
pub const DEFAULT_DOG_API_URL: &str = "https://dog.ceo/api/";

/// Client for the Dog CEO API
#[derive(Debug, Clone)]
pub struct DogApiClient {
    http: JsonClient,
}

impl DogApiClient {
    pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self, ApiError> {
        Ok(Self {
            http: JsonClient::new(base_url, options)?,
        })
    }

    /// Fetch one random image, `GET /breeds/image/random`
    pub async fn get_random_image(&self) -> Result<DogImage, ApiError> {
        let url = self.http.endpoint(&["breeds", "image", "random"])?;
        let image: DogImage = self.http.get_json(url).await?;
        if !image.is_ok() {
            tracing::warn!("Dog API reported status '{}'", image.status);
        }
        Ok(image)
    }
}
