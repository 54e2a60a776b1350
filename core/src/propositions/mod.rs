//! Propositions from the Elements, built on top of construction sessions.

pub mod book1;

use serde::Serialize;
use std::fmt;

/// Title card of a proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Proposition {
    pub book: u8,
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.description)
    }
}
