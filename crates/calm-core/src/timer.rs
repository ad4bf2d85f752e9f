//! Four-phase cyclic countdown driving the breathing guide.
//!
//! The timer is a plain struct owned by whoever presents it. It never reads a
//! clock: the owner delivers [`PhaseTimer::tick`] once per time unit while the
//! timer is running, and reads [`PhaseTimer::snapshot`] to render.

use serde::Serialize;

use crate::phase::{Pattern, Phase};

/// Copyable view of the timer for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub remaining: u32,
    pub running: bool,
}

/// What a single tick did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused; nothing changed.
    Idle,
    /// Same phase, count went down by one.
    Counted,
    /// Moved into a new phase with a full count.
    Advanced(Phase),
}

#[derive(Debug, Clone)]
pub struct PhaseTimer {
    pattern: Pattern,
    phase: Phase,
    remaining: u32,
    running: bool,
}

impl PhaseTimer {
    /// Paused at the top of Inhale.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            phase: Phase::Inhale,
            remaining: pattern.duration(Phase::Inhale),
            running: false,
        }
    }

    /// Restart at Inhale and run. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.phase = Phase::Inhale;
        self.remaining = self.pattern.duration(Phase::Inhale);
        self.running = true;
    }

    /// Freeze phase and count where they are.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause if running, otherwise start. Resuming never continues mid-cycle.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance by one time unit.
    ///
    /// A count of 1 is still displayed for a full tick; the phase changes on
    /// the tick after that, so 0 is never shown. `Advanced(Phase::Inhale)`
    /// marks the end of a full cycle.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        if self.remaining > 1 {
            self.remaining -= 1;
            return TickOutcome::Counted;
        }
        let next = self.phase.next();
        self.phase = next;
        self.remaining = self.pattern.duration(next);
        TickOutcome::Advanced(next)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            remaining: self.remaining,
            running: self.running,
        }
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new(Pattern::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> PhaseTimer {
        let mut timer = PhaseTimer::default();
        timer.start();
        timer
    }

    fn snap(phase: Phase, remaining: u32, running: bool) -> TimerSnapshot {
        TimerSnapshot {
            phase,
            remaining,
            running,
        }
    }

    #[test]
    fn test_initial_state_is_paused_inhale() {
        let timer = PhaseTimer::default();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, false));
    }

    #[test]
    fn test_start_from_initial() {
        let timer = running();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, true));
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut timer = running();
        timer.tick();
        timer.tick();
        timer.start();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 2, true));
    }

    #[test]
    fn test_count_never_shows_zero() {
        let mut timer = running();
        let mut seen = vec![timer.remaining()];
        for _ in 0..3 {
            assert_eq!(timer.tick(), TickOutcome::Counted);
            seen.push(timer.remaining());
        }
        assert_eq!(seen, vec![4, 3, 2, 1]);
        assert_eq!(timer.phase(), Phase::Inhale);

        assert_eq!(timer.tick(), TickOutcome::Advanced(Phase::HoldAfterInhale));
        assert_eq!(timer.snapshot(), snap(Phase::HoldAfterInhale, 4, true));
    }

    #[test]
    fn test_four_ticks_reach_hold() {
        let mut timer = running();
        for _ in 0..4 {
            timer.tick();
        }
        assert_eq!(timer.snapshot(), snap(Phase::HoldAfterInhale, 4, true));
    }

    #[test]
    fn test_full_cycle_is_sixteen_ticks() {
        let mut timer = running();
        for i in 1..16 {
            let outcome = timer.tick();
            assert_ne!(outcome, TickOutcome::Advanced(Phase::Inhale), "wrapped early at tick {i}");
        }
        assert_eq!(timer.tick(), TickOutcome::Advanced(Phase::Inhale));
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, true));
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut timer = running();
        for _ in 0..6 {
            timer.tick();
        }
        timer.pause();
        let frozen = timer.snapshot();
        assert_eq!(frozen, snap(Phase::HoldAfterInhale, 2, false));
        for _ in 0..50 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(timer.snapshot(), frozen);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = PhaseTimer::default();
        timer.pause();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, false));
    }

    #[test]
    fn test_toggle_twice_restarts_at_inhale() {
        let mut timer = running();
        // Exhale with 2 left: 8 ticks through Inhale and Hold, 2 into Exhale.
        for _ in 0..10 {
            timer.tick();
        }
        timer.pause();
        assert_eq!(timer.snapshot(), snap(Phase::Exhale, 2, false));

        timer.toggle();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, true));
        timer.toggle();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, false));
        timer.toggle();
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, true));
    }

    #[test]
    fn test_custom_pattern_cycle() {
        let pattern = Pattern::new([4, 7, 8, 1]).unwrap();
        let mut timer = PhaseTimer::new(pattern);
        timer.start();
        for _ in 0..pattern.cycle_len() {
            timer.tick();
        }
        assert_eq!(timer.snapshot(), snap(Phase::Inhale, 4, true));
    }

    #[test]
    fn test_one_tick_phase_advances_every_tick() {
        let pattern = Pattern::new([1, 1, 1, 1]).unwrap();
        let mut timer = PhaseTimer::new(pattern);
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Advanced(Phase::HoldAfterInhale));
        assert_eq!(timer.tick(), TickOutcome::Advanced(Phase::Exhale));
        assert_eq!(timer.tick(), TickOutcome::Advanced(Phase::HoldAfterExhale));
        assert_eq!(timer.tick(), TickOutcome::Advanced(Phase::Inhale));
        assert_eq!(timer.remaining(), 1);
    }
}
