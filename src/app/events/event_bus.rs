//! # Event Bus
//!
//! Observer list that fans state events out to every subscriber.

use super::model_events::StateEvent;

/// Type alias for state event handlers to reduce complexity
pub type StateEventHandler = Box<dyn Fn(&StateEvent) + Send + Sync>;

/// Event bus for decoupled communication between the view model and observers
pub trait EventBus: Send + Sync {
    /// Deliver an event to every subscriber, in subscription order
    fn publish(&mut self, event: StateEvent);

    /// Register a handler for all future events
    fn subscribe(&mut self, handler: StateEventHandler);

    /// Number of registered handlers
    fn subscriber_count(&self) -> usize;
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    handlers: Vec<StateEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish(&mut self, event: StateEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }

    fn subscribe(&mut self, handler: StateEventHandler) {
        self.handlers.push(handler);
    }

    fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}
