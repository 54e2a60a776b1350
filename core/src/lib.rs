pub mod error;
pub mod geometry;
pub mod construction;
pub mod propositions;

pub use construction::{ConstructionConfig, ConstructionSession, Style};
pub use error::{ConstructionError, ConstructionResult};
