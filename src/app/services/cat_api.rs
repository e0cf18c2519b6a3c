//! # Cat API Client
//!
//! Typed operations against The Cat API (`https://api.thecatapi.com/`).

use crate::app::models::CatImage;
use crate::app::services::error::ApiError;
use crate::app::services::http::{ClientOptions, JsonClient};

/// Base URL of The Cat API
pub const DEFAULT_CAT_API_URL: &str = "https://api.thecatapi.com/";

/// Number of images a search returns unless asked otherwise
pub const DEFAULT_SEARCH_LIMIT: u32 = 1;

/// Client for The Cat API
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: JsonClient,
}

impl CatApiClient {
    pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self, ApiError> {
        Ok(Self {
            http: JsonClient::new(base_url, options)?,
        })
    }

    /// Search random images, `GET /v1/images/search?limit=<limit>`
    ///
    /// A limit of zero is rejected before any request is made. The result
    /// never holds more than `limit` images.
    pub async fn search_images(&self, limit: u32) -> Result<Vec<CatImage>, ApiError> {
        if limit == 0 {
            return Err(ApiError::InvalidLimit);
        }

        let mut url = self.http.endpoint(&["v1", "images", "search"])?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());

        let mut images: Vec<CatImage> = self.http.get_json(url).await?;
        // The unauthenticated API may ignore the limit and send more
        images.truncate(limit as usize);
        tracing::debug!("Cat search returned {} image(s)", images.len());
        Ok(images)
    }

    /// Look up one image, `GET /v1/images/{id}`
    ///
    /// Empty and dot identifiers name no image and are answered with
    /// `NotFound` without a request.
    pub async fn get_image_by_id(&self, id: &str) -> Result<CatImage, ApiError> {
        if matches!(id, "" | "." | "..") {
            return Err(ApiError::NotFound);
        }

        let url = self.http.endpoint(&["v1", "images", id])?;
        match self.http.get_json(url).await {
            Err(ApiError::Http { status: 404 }) => Err(ApiError::NotFound),
            result => result,
        }
    }
}
