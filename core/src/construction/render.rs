//! Hook for whatever draws the construction.
//!
//! Calls are fire-and-forget: the session never waits on the renderer and
//! nothing it returns feeds back into the construction.

use super::types::{ConstructedPrimitive, Step};
use serde::{Deserialize, Serialize};

pub trait Renderer {
    /// Draw a styled primitive.
    fn create(&mut self, drawn: &ConstructedPrimitive);

    /// Append a step label to the on-screen list.
    fn label(&mut self, step: &Step);

    /// Fade out a transient guide.
    fn remove(&mut self, drawn: &ConstructedPrimitive);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn create(&mut self, _drawn: &ConstructedPrimitive) {}
    fn label(&mut self, _step: &Step) {}
    fn remove(&mut self, _drawn: &ConstructedPrimitive) {}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderEvent {
    Create(ConstructedPrimitive),
    Label(Step),
    Remove(ConstructedPrimitive),
}

/// Keeps every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn labels(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Label(step) => Some(step.label.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn create(&mut self, drawn: &ConstructedPrimitive) {
        self.events.push(RenderEvent::Create(drawn.clone()));
    }

    fn label(&mut self, step: &Step) {
        self.events.push(RenderEvent::Label(step.clone()));
    }

    fn remove(&mut self, drawn: &ConstructedPrimitive) {
        self.events.push(RenderEvent::Remove(drawn.clone()));
    }
}
