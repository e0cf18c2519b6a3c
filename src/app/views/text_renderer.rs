//! # Text Renderer
//!
//! Plain-text cards for fetched images and one-line status summaries for
//! fetch states. Used by the command line front end.

use crate::app::events::{Flow, StateEvent};
use crate::app::models::{CatImage, DogImage, FetchState, Phase};

/// Render everything known about a cat image
pub fn render_cat(cat: &CatImage) -> String {
    let mut lines = vec![
        "New cat".to_string(),
        format!("Image: {}", cat.url),
        format!("ID: {}", cat.id),
    ];
    if let Some((width, height)) = cat.dimensions() {
        lines.push(format!("Dimensions: {width} x {height}"));
    }

    if let Some(breed) = cat.primary_breed() {
        lines.push(String::new());
        if let Some(name) = &breed.name {
            lines.push(format!("Breed: {name}"));
        }
        if let Some(description) = &breed.description {
            lines.push(description.clone());
        }
        if let Some(origin) = &breed.origin {
            lines.push(format!("Origin: {origin}"));
        }
        if let Some(life_span) = &breed.life_span {
            lines.push(format!("Life span: {life_span} years"));
        }
        if let Some(weight) = breed.metric_weight() {
            lines.push(format!("Weight: {weight} kg"));
        }
        if let Some(temperament) = &breed.temperament {
            lines.push(format!("Temperament: {temperament}"));
        }

        let ratings = breed.ratings();
        if !ratings.is_empty() {
            lines.push("Traits:".to_string());
            for (label, value) in ratings {
                lines.push(format!("  {label}: {value}/5"));
            }
        }
    }

    lines.join("\n")
}

/// Render a dog image
pub fn render_dog(dog: &DogImage) -> String {
    format!("New dog\nImage: {}", dog.image_url())
}

/// One-line summary of a fetch state, e.g. `cat: loading`
pub fn render_status<T>(flow: Flow, state: &FetchState<T>) -> String {
    match (state.phase(), state.error()) {
        (Phase::Failure, Some(error)) => {
            let first_line = error.lines().next().unwrap_or_default();
            format!("{flow}: failure ({first_line})")
        }
        (phase, _) => format!("{flow}: {phase}"),
    }
}

/// One-line summary of a state event
pub fn render_event(event: &StateEvent) -> String {
    match event {
        StateEvent::CatStateChanged(state) => render_status(Flow::Cat, state),
        StateEvent::DogStateChanged(state) => render_status(Flow::Dog, state),
    }
}
