//! Text rendering for the breathing guide.

use calm_core::{Pattern, Phase, TimerSnapshot};

/// Width of the guide at expansion 1.0.
const BASE_WIDTH: f32 = 8.0;

/// `4-4-4-4 Box Breathing` title plus the per-phase legend.
pub fn header(pattern: &Pattern) -> String {
    let legend = Phase::ORDER
        .iter()
        .map(|p| format!("{} {}s", p.short_name(), pattern.duration(*p)))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{} Box Breathing\n{legend}", pattern.describe())
}

pub fn controls() -> &'static str {
    "Enter: start/pause   q: quit"
}

/// One line for the current timer state.
pub fn frame(snapshot: &TimerSnapshot) -> String {
    if !snapshot.running {
        return format!(
            "Paused ({} {}). Press Enter to start again.",
            snapshot.phase.label(),
            snapshot.remaining
        );
    }
    format!(
        "{:<11} {:>2}  {}",
        snapshot.phase.label(),
        snapshot.remaining,
        guide(snapshot.phase)
    )
}

/// Breathing circle drawn as a bar whose width follows the phase expansion.
fn guide(phase: Phase) -> String {
    let width = (BASE_WIDTH * phase.expansion()).round() as usize;
    format!("({})", "o".repeat(width))
}
