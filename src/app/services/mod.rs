//! # Services Layer
//!
//! Everything that talks to the network: the shared JSON client, one typed
//! client per remote API, and the repository that unifies them.

pub mod cat_api;
pub mod dog_api;
pub mod error;
pub mod http;
pub mod repository;

pub use cat_api::{CatApiClient, DEFAULT_CAT_API_URL, DEFAULT_SEARCH_LIMIT};
pub use dog_api::{DogApiClient, DEFAULT_DOG_API_URL};
pub use error::ApiError;
pub use http::{ClientOptions, JsonClient};
pub use repository::{HttpPetRepository, PetRepository};
