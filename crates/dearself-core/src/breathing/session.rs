//! Breathing session engine.
//!
//! The session is a wall-clock-independent state machine. It does not use
//! internal threads or timers - the host is responsible for calling `tick()`
//! once per elapsed second while the session is running, and for keeping at
//! most one such ticker alive per session.
//!
//! ## Phase cycle
//!
//! ```text
//! Inhale -> Hold -> Exhale -> Rest -> Inhale (cycle += 1)
//! ```
//!
//! A phase configured with duration 0 is legal and is skipped inside the
//! advancing tick, so it is never displayed for a full second.

use chrono::Utc;

use super::pattern::{BreathingPattern, Phase};
use crate::events::BreathingEvent;

/// Runtime state of one guided breathing exercise.
///
/// Created when a pattern is selected or the screen loads, mutated on every
/// tick and user command, and discarded on teardown - nothing here persists.
#[derive(Debug, Clone)]
pub struct BreathingSession {
    pattern: BreathingPattern,
    phase: Phase,
    seconds_remaining: u32,
    running: bool,
    cycles_completed: u32,
}

impl BreathingSession {
    /// Create a paused session at the top of the cycle.
    pub fn new(pattern: BreathingPattern) -> Self {
        Self {
            pattern,
            phase: Phase::Inhale,
            seconds_remaining: pattern.inhale_secs,
            running: false,
            cycles_completed: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn pattern(&self) -> &BreathingPattern {
        &self.pattern
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> BreathingEvent {
        BreathingEvent::StateSnapshot {
            pattern: self.pattern.name.to_string(),
            phase: self.phase,
            instruction: self.phase.instruction().to_string(),
            seconds_remaining: self.seconds_remaining,
            running: self.running,
            cycles_completed: self.cycles_completed,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the pattern and fully reset the session. The session comes
    /// back paused: restarting is an explicit user action, so a pattern
    /// change mid-run cannot double-tick at the reset instant.
    pub fn select_pattern(&mut self, pattern: BreathingPattern) -> BreathingEvent {
        self.pattern = pattern;
        self.apply_reset();
        BreathingEvent::SessionReset {
            pattern: self.pattern.name.to_string(),
            at: Utc::now(),
        }
    }

    /// Flip running. No effect on phase, remaining seconds, or cycle count.
    pub fn toggle_running(&mut self) -> BreathingEvent {
        self.running = !self.running;
        if self.running {
            BreathingEvent::SessionStarted {
                pattern: self.pattern.name.to_string(),
                phase: self.phase,
                seconds_remaining: self.seconds_remaining,
                at: Utc::now(),
            }
        } else {
            BreathingEvent::SessionPaused {
                phase: self.phase,
                seconds_remaining: self.seconds_remaining,
                at: Utc::now(),
            }
        }
    }

    /// Stop and return to the top of the cycle.
    pub fn reset(&mut self) -> BreathingEvent {
        self.apply_reset();
        BreathingEvent::SessionReset {
            pattern: self.pattern.name.to_string(),
            at: Utc::now(),
        }
    }

    /// Advance one wall-clock second. No-op while paused.
    ///
    /// The last second of a phase elapses on the tick that moves to the next
    /// phase, so a phase of duration `d` occupies exactly `d` ticks. Returns
    /// an event only when the phase changed.
    pub fn tick(&mut self) -> Option<BreathingEvent> {
        if !self.running {
            return None;
        }
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        }
        if self.seconds_remaining > 0 {
            return None;
        }
        Some(self.advance())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn apply_reset(&mut self) {
        self.running = false;
        self.phase = Phase::Inhale;
        self.seconds_remaining = self.pattern.inhale_secs;
        self.cycles_completed = 0;
    }

    /// Move to the next phase with a non-zero duration, counting a cycle each
    /// time the phase wraps into Inhale. An all-zero pattern parks the
    /// session after one lap instead of spinning.
    fn advance(&mut self) -> BreathingEvent {
        let mut wrapped = false;
        for _ in 0..4 {
            self.phase = self.phase.next();
            if self.phase == Phase::Inhale {
                self.cycles_completed += 1;
                wrapped = true;
            }
            let duration = self.pattern.duration_of(self.phase);
            if duration > 0 {
                self.seconds_remaining = duration;
                return if wrapped {
                    BreathingEvent::CycleCompleted {
                        cycles_completed: self.cycles_completed,
                        at: Utc::now(),
                    }
                } else {
                    BreathingEvent::PhaseAdvanced {
                        phase: self.phase,
                        duration_secs: duration,
                        at: Utc::now(),
                    }
                };
            }
        }
        // Every phase has duration 0; nothing left to count down.
        self.running = false;
        self.seconds_remaining = 0;
        BreathingEvent::SessionPaused {
            phase: self.phase,
            seconds_remaining: 0,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::pattern::{catalog, find_pattern};
    use proptest::prelude::*;

    fn box_breathing() -> BreathingPattern {
        *find_pattern("box").unwrap()
    }

    fn energizing() -> BreathingPattern {
        *find_pattern("energizing").unwrap()
    }

    fn run_ticks(session: &mut BreathingSession, n: u32) {
        for _ in 0..n {
            session.tick();
        }
    }

    #[test]
    fn new_session_is_paused_at_inhale() {
        let session = BreathingSession::new(box_breathing());
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.seconds_remaining(), 4);
        assert!(!session.running());
        assert_eq!(session.cycles_completed(), 0);
    }

    #[test]
    fn tick_is_noop_while_paused() {
        let mut session = BreathingSession::new(box_breathing());
        assert!(session.tick().is_none());
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.seconds_remaining(), 4);
    }

    #[test]
    fn box_breathing_reaches_hold_after_four_ticks() {
        let mut session = BreathingSession::new(box_breathing());
        session.toggle_running();
        run_ticks(&mut session, 4);
        assert_eq!(session.phase(), Phase::Hold);
        assert_eq!(session.seconds_remaining(), 4);
        assert_eq!(session.cycles_completed(), 0);
    }

    #[test]
    fn box_breathing_completes_cycle_after_sixteen_ticks() {
        let mut session = BreathingSession::new(box_breathing());
        session.toggle_running();
        run_ticks(&mut session, 16);
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.seconds_remaining(), 4);
        assert_eq!(session.cycles_completed(), 1);
    }

    #[test]
    fn energizing_skips_zero_duration_hold_within_one_tick() {
        let mut session = BreathingSession::new(energizing());
        session.toggle_running();
        // Inhale is 3s; the third tick must land directly on Exhale.
        run_ticks(&mut session, 2);
        assert_eq!(session.phase(), Phase::Inhale);
        let event = session.tick().unwrap();
        assert_eq!(session.phase(), Phase::Exhale);
        assert_eq!(session.seconds_remaining(), 3);
        assert!(matches!(event, BreathingEvent::PhaseAdvanced { phase: Phase::Exhale, .. }));
    }

    #[test]
    fn energizing_counts_cycle_across_zero_rest() {
        let mut session = BreathingSession::new(energizing());
        session.toggle_running();
        run_ticks(&mut session, 6);
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.seconds_remaining(), 3);
        assert_eq!(session.cycles_completed(), 1);
    }

    #[test]
    fn cycle_completed_event_fires_on_inhale_entry() {
        let mut session = BreathingSession::new(energizing());
        session.toggle_running();
        run_ticks(&mut session, 5);
        let event = session.tick().unwrap();
        assert!(matches!(
            event,
            BreathingEvent::CycleCompleted { cycles_completed: 1, .. }
        ));
    }

    #[test]
    fn toggle_twice_restores_running_without_touching_state() {
        let mut session = BreathingSession::new(box_breathing());
        session.toggle_running();
        run_ticks(&mut session, 6);
        let (phase, remaining, cycles) = (
            session.phase(),
            session.seconds_remaining(),
            session.cycles_completed(),
        );
        session.toggle_running();
        session.toggle_running();
        assert!(session.running());
        assert_eq!(session.phase(), phase);
        assert_eq!(session.seconds_remaining(), remaining);
        assert_eq!(session.cycles_completed(), cycles);
    }

    #[test]
    fn reset_is_absorbing() {
        let mut session = BreathingSession::new(box_breathing());
        session.toggle_running();
        run_ticks(&mut session, 23);
        session.reset();
        assert!(!session.running());
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.seconds_remaining(), 4);
        assert_eq!(session.cycles_completed(), 0);
    }

    #[test]
    fn select_pattern_resets_and_pauses() {
        let mut session = BreathingSession::new(box_breathing());
        session.toggle_running();
        run_ticks(&mut session, 9);
        session.select_pattern(energizing());
        assert!(!session.running());
        assert_eq!(session.pattern().name, "Energizing Breath");
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.seconds_remaining(), 3);
        assert_eq!(session.cycles_completed(), 0);
    }

    #[test]
    fn all_zero_pattern_parks_instead_of_spinning() {
        let pattern = BreathingPattern {
            name: "Stillness",
            description: "",
            benefit: "",
            inhale_secs: 0,
            hold_secs: 0,
            exhale_secs: 0,
            rest_secs: 0,
        };
        let mut session = BreathingSession::new(pattern);
        session.toggle_running();
        session.tick();
        assert!(!session.running());
        assert_eq!(session.seconds_remaining(), 0);
    }

    #[test]
    fn four_seven_eight_full_trace() {
        let mut session = BreathingSession::new(catalog()[0]);
        session.toggle_running();
        run_ticks(&mut session, 4);
        assert_eq!(session.phase(), Phase::Hold);
        assert_eq!(session.seconds_remaining(), 7);
        run_ticks(&mut session, 7);
        assert_eq!(session.phase(), Phase::Exhale);
        assert_eq!(session.seconds_remaining(), 8);
        // Rest is 0s, so the cycle closes straight into Inhale.
        run_ticks(&mut session, 8);
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.cycles_completed(), 1);
    }

    fn arb_pattern() -> impl Strategy<Value = BreathingPattern> {
        (1u32..=10, 0u32..=10, 0u32..=10, 0u32..=10).prop_map(|(i, h, e, r)| BreathingPattern {
            name: "Generated",
            description: "",
            benefit: "",
            inhale_secs: i,
            hold_secs: h,
            exhale_secs: e,
            rest_secs: r,
        })
    }

    proptest! {
        /// Each full traversal of the four phases takes exactly the sum of
        /// the configured durations, no matter which phases are zero.
        #[test]
        fn prop_cycle_count_matches_elapsed_ticks(pattern in arb_pattern(), k in 1u32..=5) {
            let mut session = BreathingSession::new(pattern);
            session.toggle_running();
            run_ticks(&mut session, pattern.cycle_secs() * k);
            prop_assert_eq!(session.cycles_completed(), k);
            prop_assert_eq!(session.phase(), Phase::Inhale);
            prop_assert_eq!(session.seconds_remaining(), pattern.inhale_secs);
        }

        /// The remaining-seconds counter never leaves the current phase's
        /// configured range while running.
        #[test]
        fn prop_remaining_stays_in_bounds(pattern in arb_pattern(), ticks in 0u32..200) {
            let mut session = BreathingSession::new(pattern);
            session.toggle_running();
            for _ in 0..ticks {
                session.tick();
                prop_assert!(session.seconds_remaining() >= 1);
                prop_assert!(session.seconds_remaining() <= pattern.duration_of(session.phase()));
            }
        }

        /// Cycle count moves only when the phase wraps into Inhale.
        #[test]
        fn prop_cycles_increment_only_on_inhale_entry(pattern in arb_pattern(), ticks in 0u32..200) {
            let mut session = BreathingSession::new(pattern);
            session.toggle_running();
            let mut cycles = session.cycles_completed();
            let mut phase = session.phase();
            for _ in 0..ticks {
                session.tick();
                if session.cycles_completed() != cycles {
                    prop_assert_eq!(session.cycles_completed(), cycles + 1);
                    prop_assert_eq!(session.phase(), Phase::Inhale);
                    prop_assert!(phase != Phase::Inhale || pattern.cycle_secs() == pattern.inhale_secs);
                    cycles = session.cycles_completed();
                }
                phase = session.phase();
            }
        }
    }
}
