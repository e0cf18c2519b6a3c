//! # Views Module
//!
//! Text rendering for the command line front end.

pub mod text_renderer;

pub use text_renderer::{render_cat, render_dog, render_event, render_status};
