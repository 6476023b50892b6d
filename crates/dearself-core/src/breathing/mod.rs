//! Guided breathing: pattern catalog and the phase-cycling session engine.

pub mod pattern;
pub mod session;

pub use pattern::{catalog, find_pattern, BreathingPattern, Phase};
pub use session::BreathingSession;
