//! # Fetch State Model
//!
//! State of one fetch flow (cat or dog). The fields are private so that the
//! only way to change a state is through the transition methods, which keep
//! `data` and `error` consistent with the phase:
//!
//! | phase   | data | error |
//! |---------|------|-------|
//! | Idle    | -    | -     |
//! | Loading | -    | -     |
//! | Success | yes  | -     |
//! | Failure | -    | yes   |

use std::fmt;

/// Discrete stage of a fetch flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Success => "success",
            Phase::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// Transient state of a single fetch flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState<T> {
    phase: Phase,
    data: Option<T>,
    error: Option<String>,
}

impl<T> FetchState<T> {
    /// Create an idle state with no data and no error
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the flow has reached Success or Failure
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Success | Phase::Failure)
    }

    /// Enter Loading, dropping any previous result
    ///
    /// Valid from every phase; a settled flow can be re-triggered any number
    /// of times.
    pub fn start_loading(&mut self) {
        self.phase = Phase::Loading;
        self.data = None;
        self.error = None;
    }

    /// Store a fetched value and enter Success
    pub fn succeed(&mut self, value: T) {
        self.phase = Phase::Success;
        self.data = Some(value);
        self.error = None;
    }

    /// Store an error description and enter Failure
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failure;
        self.data = None;
        self.error = Some(message.into());
    }

    /// Drop the stored result without touching an in-flight request
    ///
    /// A settled flow falls back to Idle; a loading flow keeps loading.
    /// Returns whether anything changed.
    pub fn clear_result(&mut self) -> bool {
        if !self.is_settled() {
            return false;
        }
        self.phase = Phase::Idle;
        self.data = None;
        self.error = None;
        true
    }

    /// Settled outcome of the flow, `None` while idle or loading
    pub fn outcome(&self) -> Option<Result<&T, &str>> {
        match self.phase {
            Phase::Success => self.data.as_ref().map(Ok),
            Phase::Failure => self.error.as_deref().map(Err),
            Phase::Idle | Phase::Loading => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}
