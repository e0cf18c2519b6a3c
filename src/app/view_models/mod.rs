//! # ViewModel Module
//!
//! Headless view model split into focused responsibilities: core state and
//! observers, fetch commands, and flow settings.

mod core;
mod fetch_manager;
mod settings;


pub use core::PetViewModel;
pub use settings::{FlowSettings, ResolutionPolicy};
