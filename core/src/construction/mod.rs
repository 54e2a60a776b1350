//! Compass-and-straightedge construction sessions.
//!
//! A [`ConstructionSession`] tracks which points are accessible and only lets
//! new primitives be anchored at those points, following Euclid's first three
//! postulates.

pub mod types;
pub mod registry;
pub mod render;
mod postulates;
mod session;

pub use registry::{AccessiblePointSet, Registry};
pub use render::{NullRenderer, RecordingRenderer, RenderEvent, Renderer};
pub use session::{ConstructionSession, SessionSnapshot};
pub use types::*;

#[cfg(test)]
mod tests_registry;

#[cfg(test)]
mod tests_postulates;
