//! # Models Module
//!
//! Pure data models: the response documents of both remote APIs and the
//! per-flow fetch state.

pub mod cat_image;
pub mod dog_image;
pub mod fetch_state;

pub use cat_image::{Breed, CatImage, Weight};
pub use dog_image::{DogImage, DOG_STATUS_OK};
pub use fetch_state::{FetchState, Phase};
