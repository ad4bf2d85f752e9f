use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of phases in one breathing cycle.
pub const PHASE_COUNT: usize = 4;

/// Default duration of every phase, in ticks (4-4-4-4 box breathing).
pub const DEFAULT_PHASE_SECS: u32 = 4;

/// One stage of the box breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Inhale,
    HoldAfterInhale,
    Exhale,
    HoldAfterExhale,
}

impl Phase {
    /// Phases in cycle order. The ring wraps from the last back to the first.
    pub const ORDER: [Phase; PHASE_COUNT] = [
        Phase::Inhale,
        Phase::HoldAfterInhale,
        Phase::Exhale,
        Phase::HoldAfterExhale,
    ];

    /// Position of this phase in [`Phase::ORDER`].
    pub fn index(self) -> usize {
        match self {
            Phase::Inhale => 0,
            Phase::HoldAfterInhale => 1,
            Phase::Exhale => 2,
            Phase::HoldAfterExhale => 3,
        }
    }

    pub fn next(self) -> Phase {
        Phase::ORDER[(self.index() + 1) % PHASE_COUNT]
    }

    /// Instruction shown while the phase is active.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::HoldAfterInhale | Phase::HoldAfterExhale => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }

    /// Short name used in the pattern legend.
    pub fn short_name(self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::HoldAfterInhale | Phase::HoldAfterExhale => "Hold",
            Phase::Exhale => "Exhale",
        }
    }

    /// Relative size of the breathing guide while this phase is active.
    /// Lungs full on inhale, emptied on exhale, steady in between.
    pub fn expansion(self) -> f32 {
        match self {
            Phase::Inhale => 1.5,
            Phase::Exhale => 0.75,
            Phase::HoldAfterInhale | Phase::HoldAfterExhale => 1.25,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    ZeroDuration(Phase),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::ZeroDuration(phase) => {
                write!(f, "{} phase must last at least one tick", phase.short_name())
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Per-phase durations, in ticks.
///
/// Every duration is at least 1, so the countdown always has something to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pattern {
    durations: [u32; PHASE_COUNT],
}

impl Pattern {
    pub fn new(durations: [u32; PHASE_COUNT]) -> Result<Self, PatternError> {
        for phase in Phase::ORDER {
            if durations[phase.index()] == 0 {
                return Err(PatternError::ZeroDuration(phase));
            }
        }
        Ok(Self { durations })
    }

    /// Classic box breathing: every phase lasts [`DEFAULT_PHASE_SECS`].
    pub fn box_breathing() -> Self {
        Self {
            durations: [DEFAULT_PHASE_SECS; PHASE_COUNT],
        }
    }

    pub fn duration(&self, phase: Phase) -> u32 {
        self.durations[phase.index()]
    }

    /// Ticks needed for one full Inhale → HoldAfterExhale cycle.
    pub fn cycle_len(&self) -> u32 {
        self.durations.iter().sum()
    }

    /// Human-readable shape, e.g. `4-4-4-4`.
    pub fn describe(&self) -> String {
        self.durations
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::box_breathing()
    }
}
