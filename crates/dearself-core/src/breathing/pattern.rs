//! Breathing phases and the fixed pattern catalog.

use serde::{Deserialize, Serialize};

/// One of the four stages of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl Phase {
    /// Cyclic successor: inhale -> hold -> exhale -> rest -> inhale.
    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Rest,
            Phase::Rest => Phase::Inhale,
        }
    }

    /// On-screen instruction for the phase.
    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe Out",
            Phase::Rest => "Rest",
        }
    }
}

/// A named catalog entry defining per-phase durations in seconds.
/// Immutable; the catalog is fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreathingPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
    pub inhale_secs: u32,
    pub hold_secs: u32,
    pub exhale_secs: u32,
    pub rest_secs: u32,
}

impl BreathingPattern {
    pub fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Inhale => self.inhale_secs,
            Phase::Hold => self.hold_secs,
            Phase::Exhale => self.exhale_secs,
            Phase::Rest => self.rest_secs,
        }
    }

    /// Wall-clock seconds one full cycle takes.
    pub fn cycle_secs(&self) -> u32 {
        self.inhale_secs + self.hold_secs + self.exhale_secs + self.rest_secs
    }
}

/// The three built-in patterns.
pub fn catalog() -> &'static [BreathingPattern] {
    &[
        BreathingPattern {
            name: "4-7-8 Relaxation",
            description: "Perfect for stress relief and better sleep",
            benefit: "Reduces anxiety and promotes relaxation",
            inhale_secs: 4,
            hold_secs: 7,
            exhale_secs: 8,
            rest_secs: 0,
        },
        BreathingPattern {
            name: "Box Breathing",
            description: "Used by Navy SEALs for focus and calm",
            benefit: "Improves focus and reduces stress",
            inhale_secs: 4,
            hold_secs: 4,
            exhale_secs: 4,
            rest_secs: 4,
        },
        BreathingPattern {
            name: "Energizing Breath",
            description: "Quick energy boost for alertness",
            benefit: "Increases energy and mental clarity",
            inhale_secs: 3,
            hold_secs: 0,
            exhale_secs: 3,
            rest_secs: 0,
        },
    ]
}

/// Look up a catalog pattern by name. Matching is case-insensitive and
/// accepts any unambiguous prefix ("box" finds "Box Breathing").
pub fn find_pattern(name: &str) -> Option<&'static BreathingPattern> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let exact = catalog()
        .iter()
        .find(|p| p.name.to_lowercase() == needle);
    if exact.is_some() {
        return exact;
    }
    let mut matches = catalog()
        .iter()
        .filter(|p| p.name.to_lowercase().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(p), None) => Some(p),
        _ => None,
    }
}
