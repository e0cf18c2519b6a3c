//! # Model Events
//!
//! Events emitted whenever a fetch flow changes state. Each event carries a
//! full snapshot of the flow so observers never need to call back into the
//! view model.

use crate::app::models::{CatImage, DogImage, FetchState, Phase};
use std::fmt;

/// The two independent fetch flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Cat,
    Dog,
}

impl Flow {
    /// The flow whose result is cleared when this one starts
    pub fn other(self) -> Self {
        match self {
            Flow::Cat => Flow::Dog,
            Flow::Dog => Flow::Cat,
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Cat => f.write_str("cat"),
            Flow::Dog => f.write_str("dog"),
        }
    }
}

/// Events emitted when a fetch state changes
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// The cat flow changed phase, data or error
    CatStateChanged(FetchState<CatImage>),

    /// The dog flow changed phase, data or error
    DogStateChanged(FetchState<DogImage>),
}

impl StateEvent {
    pub fn flow(&self) -> Flow {
        match self {
            StateEvent::CatStateChanged(_) => Flow::Cat,
            StateEvent::DogStateChanged(_) => Flow::Dog,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            StateEvent::CatStateChanged(state) => state.phase(),
            StateEvent::DogStateChanged(state) => state.phase(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StateEvent::CatStateChanged(state) => state.error(),
            StateEvent::DogStateChanged(state) => state.error(),
        }
    }
}
