//! # Application Controller
//!
//! Composes the repository and the view model from a profile, runs one
//! fetch command and writes the outcome. This is the presentation layer of
//! the command line front end: it only renders states and invokes commands.

use crate::app::events::{Flow, StateEvent};
use crate::app::models::{FetchState, Phase};
use crate::app::services::{HttpPetRepository, PetRepository};
use crate::app::view_models::{FlowSettings, PetViewModel};
use crate::app::views::{render_cat, render_dog, render_event, render_status};
use crate::cmd_args::FetchCommand;
use crate::config::ApiProfile;
use anyhow::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Drives one fetch command from start to a settled state
pub struct AppController {
    repository: Arc<dyn PetRepository>,
    view_model: PetViewModel,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl AppController {
    /// Create a controller talking to the endpoints of `profile`
    pub fn new(profile: &ApiProfile) -> Result<Self> {
        let repository = HttpPetRepository::from_endpoints(
            profile.cat_api_url(),
            profile.dog_api_url(),
            &profile.client_options(),
        )?;
        Ok(Self::with_repository(
            Arc::new(repository),
            profile.flow_settings(),
        ))
    }

    /// Create a controller over any repository (dependency injection)
    pub fn with_repository(repository: Arc<dyn PetRepository>, settings: FlowSettings) -> Self {
        let view_model = PetViewModel::with_settings(Arc::clone(&repository), settings);

        let transcript = Arc::new(Mutex::new(Vec::new()));
        let transcript_clone = transcript.clone();
        view_model.subscribe(move |event: &StateEvent| {
            let line = render_event(event);
            tracing::debug!("State changed: {}", line);
            if let Ok(mut lines) = transcript_clone.lock() {
                lines.push(line);
            }
        });

        Self {
            repository,
            view_model,
            transcript,
        }
    }

    /// Run `command`, write progress and result to `out`, return the final phase
    pub async fn run<W: Write>(&self, command: &FetchCommand, out: &mut W) -> Result<Phase> {
        match command {
            FetchCommand::Cat => {
                self.view_model.request_cat().await?;
                self.write_transcript(out)?;
                write_outcome(out, Flow::Cat, &self.view_model.cat_state(), render_cat)
            }
            FetchCommand::CatId { id } => {
                self.view_model.request_cat_by_id(id.as_str()).await?;
                self.write_transcript(out)?;
                write_outcome(out, Flow::Cat, &self.view_model.cat_state(), render_cat)
            }
            FetchCommand::Dog => {
                self.view_model.request_dog().await?;
                self.write_transcript(out)?;
                write_outcome(out, Flow::Dog, &self.view_model.dog_state(), render_dog)
            }
            FetchCommand::Search { limit } => self.search(*limit, out).await,
        }
    }

    /// List several cats; bypasses the fetch flows since it yields many images
    async fn search<W: Write>(&self, limit: u32, out: &mut W) -> Result<Phase> {
        match self.repository.search_cats(limit).await {
            Ok(cats) => {
                writeln!(out, "Found {} image(s)", cats.len())?;
                for cat in &cats {
                    writeln!(out)?;
                    writeln!(out, "{}", render_cat(cat))?;
                }
                Ok(Phase::Success)
            }
            Err(err) => {
                tracing::warn!("Cat search failed: {}", err);
                writeln!(out, "Error: {}", err.failure_message())?;
                Ok(Phase::Failure)
            }
        }
    }

    fn write_transcript<W: Write>(&self, out: &mut W) -> Result<()> {
        let lines = match self.transcript.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

fn write_outcome<T, W: Write>(
    out: &mut W,
    flow: Flow,
    state: &FetchState<T>,
    render: impl Fn(&T) -> String,
) -> Result<Phase> {
    match state.outcome() {
        Some(Ok(value)) => {
            writeln!(out)?;
            writeln!(out, "{}", render(value))?;
        }
        Some(Err(message)) => {
            writeln!(out)?;
            writeln!(out, "Error: {message}")?;
        }
        // The response was discarded in favour of a newer request
        None => writeln!(out, "{}", render_status(flow, state))?,
    }
    Ok(state.phase())
}
