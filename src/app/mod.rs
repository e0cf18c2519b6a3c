//! # Application Module
//!
//! The headless pet image client, organized MVVM-style:
//!
//! - **models**: response documents and per-flow fetch state
//! - **services**: HTTP clients and the repository
//! - **events**: state change events and the observer bus
//! - **view_models**: the fetch state machine driving both flows
//! - **views**: plain-text rendering
//! - **controller**: wires everything together for the command line

pub mod controller;
pub mod events;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controller::AppController;
pub use events::{EventBus, Flow, SimpleEventBus, StateEvent};
pub use models::{Breed, CatImage, DogImage, FetchState, Phase, Weight};
pub use services::{
    ApiError, CatApiClient, ClientOptions, DogApiClient, HttpPetRepository, PetRepository,
};
pub use view_models::{FlowSettings, PetViewModel, ResolutionPolicy};
