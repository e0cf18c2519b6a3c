//! # pawfetch - Random Cat and Dog Pictures
//!
//! A headless client for The Cat API and Dog CEO API. A view model owns one
//! fetch flow per animal and notifies observers on every state change, so
//! any front end can render it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   StateEvents  ┌──────────────┐    calls     ┌────────────┐
//! │    View     │◄───────────────│  ViewModel   │─────────────►│ Repository │
//! │             │                │              │              │            │
//! │ - CLI text  │                │ - Cat flow   │              │ - Cat API  │
//! │   renderer  │    commands    │ - Dog flow   │   Results    │ - Dog API  │
//! │             │───────────────►│              │◄─────────────│            │
//! └─────────────┘                └──────────────┘              └────────────┘
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use app::*;
