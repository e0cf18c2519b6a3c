//! # Core ViewModel Structure
//!
//! Contains the `PetViewModel` struct, its shared state and the observer
//! plumbing. Fetch commands live in `fetch_manager`.
//!
//! All state sits behind one mutex. The lock is only taken for short,
//! synchronous updates and is never held across an `.await`.

use crate::app::events::{EventBus, Flow, SimpleEventBus, StateEvent};
use crate::app::models::{CatImage, DogImage, FetchState};
use crate::app::services::{ApiError, PetRepository};
use crate::app::view_models::settings::{FlowSettings, ResolutionPolicy};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Per-flow bookkeeping: current state, request generation and watch channel
pub(crate) struct FlowSlot<T> {
    pub(crate) state: FetchState<T>,
    generation: u64,
    sender: watch::Sender<FetchState<T>>,
}

impl<T: Clone> FlowSlot<T> {
    fn new() -> Self {
        let (sender, _) = watch::channel(FetchState::new());
        Self {
            state: FetchState::new(),
            generation: 0,
            sender,
        }
    }

    /// Enter Loading and hand out the generation of the new request
    pub(crate) fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state.start_loading();
        self.generation
    }

    /// Apply a completed request; returns false when the response was stale
    pub(crate) fn resolve(
        &mut self,
        generation: u64,
        policy: ResolutionPolicy,
        result: Result<T, ApiError>,
    ) -> bool {
        if policy == ResolutionPolicy::LatestIssued && generation != self.generation {
            return false;
        }
        match result {
            Ok(value) => self.state.succeed(value),
            Err(err) => self.state.fail(err.failure_message()),
        }
        true
    }
}

/// Image types that own a fetch flow in the view model
pub(crate) trait FlowValue: Clone + Send + 'static {
    const FLOW: Flow;
    /// Value type of the flow cleared when this one starts
    type Other: FlowValue;

    fn slot(inner: &mut Inner) -> &mut FlowSlot<Self>;
    fn event(state: FetchState<Self>) -> StateEvent;
}

impl FlowValue for CatImage {
    const FLOW: Flow = Flow::Cat;
    type Other = DogImage;

    fn slot(inner: &mut Inner) -> &mut FlowSlot<Self> {
        &mut inner.cat
    }

    fn event(state: FetchState<Self>) -> StateEvent {
        StateEvent::CatStateChanged(state)
    }
}

impl FlowValue for DogImage {
    const FLOW: Flow = Flow::Dog;
    type Other = CatImage;

    fn slot(inner: &mut Inner) -> &mut FlowSlot<Self> {
        &mut inner.dog
    }

    fn event(state: FetchState<Self>) -> StateEvent {
        StateEvent::DogStateChanged(state)
    }
}

/// Mutable state shared between the view model and its fetch tasks
pub(crate) struct Inner {
    cat: FlowSlot<CatImage>,
    dog: FlowSlot<DogImage>,
    bus: Box<dyn EventBus>,
}

impl Inner {
    fn new() -> Self {
        Self {
            cat: FlowSlot::new(),
            dog: FlowSlot::new(),
            bus: Box::new(SimpleEventBus::new()),
        }
    }

    /// Push the current state of a flow to watchers and subscribers
    pub(crate) fn commit<T: FlowValue>(&mut self) {
        let slot = T::slot(self);
        let snapshot = slot.state.clone();
        slot.sender.send_replace(snapshot.clone());
        self.bus.publish(T::event(snapshot));
    }
}

/// Headless view model owning the cat and dog fetch flows
///
/// Commands (`request_cat`, `request_dog`, ...) update the state
/// synchronously and spawn one Tokio task per request. Observers learn about
/// every change through [`PetViewModel::subscribe`] or the watch receivers.
pub struct PetViewModel {
    pub(crate) repository: Arc<dyn PetRepository>,
    pub(crate) settings: FlowSettings,
    pub(crate) inner: Arc<Mutex<Inner>>,
}

impl PetViewModel {
    /// Create a view model with default flow settings
    pub fn new(repository: Arc<dyn PetRepository>) -> Self {
        Self::with_settings(repository, FlowSettings::default())
    }

    pub fn with_settings(repository: Arc<dyn PetRepository>, settings: FlowSettings) -> Self {
        tracing::debug!(
            "Creating PetViewModel (exclusive_flows={}, resolution_policy={})",
            settings.exclusive_flows,
            settings.resolution_policy
        );
        Self {
            repository,
            settings,
            inner: Arc::new(Mutex::new(Inner::new())),
        }
    }

    pub fn settings(&self) -> FlowSettings {
        self.settings
    }

    /// Snapshot of the cat flow
    pub fn cat_state(&self) -> FetchState<CatImage> {
        lock(&self.inner).cat.state.clone()
    }

    /// Snapshot of the dog flow
    pub fn dog_state(&self) -> FetchState<DogImage> {
        lock(&self.inner).dog.state.clone()
    }

    /// Register an observer for every state change of either flow
    ///
    /// Handlers run while the view model's state lock is held, which keeps
    /// events in the order the changes happened. A handler must not call back
    /// into the view model; everything it needs is in the event.
    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&StateEvent) + Send + Sync + 'static,
    {
        lock(&self.inner).bus.subscribe(Box::new(handler));
    }

    /// Watch channel carrying the latest cat state
    pub fn subscribe_cat(&self) -> watch::Receiver<FetchState<CatImage>> {
        lock(&self.inner).cat.sender.subscribe()
    }

    /// Watch channel carrying the latest dog state
    pub fn subscribe_dog(&self) -> watch::Receiver<FetchState<DogImage>> {
        lock(&self.inner).dog.sender.subscribe()
    }
}

/// Lock the shared state, recovering it if a handler panicked while holding it
pub(crate) fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
