//! Interactive box breathing session.
//!
//! The session owns the [`PhaseTimer`] and is the only thing that mutates it.
//! Three event sources are multiplexed: metronome ticks (present only while
//! running), control lines from the user, and a shutdown signal.
//!
//! Control lines arrive over a channel fed by a dedicated reader thread, so an
//! outstanding terminal read never holds the runtime open after the session.

use std::future::Future;
use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use calm_core::{Pattern, Phase, PhaseTimer, TickOutcome};
use tokio::sync::mpsc;

use crate::metronome::Metronome;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Requested number of cycles finished.
    Completed,
    /// User typed `q`.
    Quit,
    /// Ctrl-C or another shutdown signal.
    Interrupted,
    /// Input closed while paused; nothing could resume the timer.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub cycles: u64,
    pub reason: EndReason,
}

/// What a line of user input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Toggle,
    Quit,
    Unknown,
}

fn parse_control(line: &str) -> Control {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "p" | "pause" | "s" | "start" => Control::Toggle,
        "q" | "quit" | "exit" => Control::Quit,
        _ => Control::Unknown,
    }
}

pub struct BreathingSession {
    timer: PhaseTimer,
    metronome: Option<Metronome>,
    period: Duration,
    /// Full cycles across the whole session. The timer's own counter
    /// restarts on every resume.
    cycles: u64,
}

impl BreathingSession {
    pub fn new(pattern: Pattern, period: Duration) -> Self {
        Self {
            timer: PhaseTimer::new(pattern),
            metronome: None,
            period,
            cycles: 0,
        }
    }

    pub fn timer(&self) -> &PhaseTimer {
        &self.timer
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether a metronome is currently held.
    pub fn is_ticking(&self) -> bool {
        self.metronome.is_some()
    }

    pub fn start(&mut self) {
        self.timer.start();
        self.sync_metronome();
    }

    pub fn pause(&mut self) {
        self.timer.pause();
        self.sync_metronome();
    }

    pub fn toggle(&mut self) {
        self.timer.toggle();
        self.sync_metronome();
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Advanced(Phase::Inhale) {
            self.cycles += 1;
        }
        outcome
    }

    /// Keep the metronome one-to-one with `running`.
    fn sync_metronome(&mut self) {
        match (self.timer.is_running(), self.metronome.is_some()) {
            (true, false) => self.metronome = Some(Metronome::start(self.period)),
            (false, true) => self.metronome = None,
            _ => {}
        }
    }
}

/// Forward stdin lines to a channel from a plain OS thread.
/// The channel closes on EOF or read error.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(8);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

async fn next_tick(metronome: &mut Option<Metronome>) -> Option<()> {
    match metronome {
        Some(m) => m.tick().await,
        None => std::future::pending().await,
    }
}

/// Run a session until it completes, the user quits, or `shutdown` resolves.
///
/// `cycles`: stop after this many full cycles; `None` runs until stopped.
/// The metronome is released on every return path when `session` drops.
pub async fn run<W, S>(
    pattern: Pattern,
    period: Duration,
    cycles: Option<u64>,
    mut controls: mpsc::Receiver<String>,
    out: &mut W,
    shutdown: S,
) -> Result<SessionSummary>
where
    W: Write,
    S: Future<Output = ()>,
{
    let mut session = BreathingSession::new(pattern, period);
    let mut input_open = true;
    let mut ticks = 0u64;
    tokio::pin!(shutdown);

    writeln!(out, "{}", render::header(&pattern))?;
    writeln!(out, "{}", render::controls())?;

    session.start();
    writeln!(out, "{}", render::frame(&session.timer().snapshot()))?;

    let reason = loop {
        tokio::select! {
            _ = &mut shutdown => break EndReason::Interrupted,

            tick = next_tick(&mut session.metronome), if session.is_ticking() => {
                if tick.is_none() {
                    anyhow::bail!("metronome stopped unexpectedly");
                }
                ticks += 1;
                if let TickOutcome::Advanced(phase) = session.tick() {
                    tracing::trace!("phase -> {phase:?}");
                }
                if let Some(limit) = cycles
                    && session.cycles() >= limit
                {
                    break EndReason::Completed;
                }
                writeln!(out, "{}", render::frame(&session.timer().snapshot()))?;
            }

            line = controls.recv(), if input_open => {
                match line {
                    Some(line) => match parse_control(&line) {
                        Control::Toggle => {
                            session.toggle();
                            writeln!(out, "{}", render::frame(&session.timer().snapshot()))?;
                        }
                        Control::Quit => break EndReason::Quit,
                        Control::Unknown => {
                            writeln!(
                                out,
                                "unknown control '{}'. {}",
                                line.trim(),
                                render::controls()
                            )?;
                        }
                    },
                    None => {
                        tracing::debug!("control input closed");
                        input_open = false;
                        if !session.timer().is_running() {
                            break EndReason::InputClosed;
                        }
                    }
                }
            }
        }
    };

    session.pause();
    let summary = SessionSummary {
        ticks,
        cycles: session.cycles(),
        reason,
    };
    let plural = if summary.cycles == 1 { "" } else { "s" };
    match reason {
        EndReason::Completed => writeln!(
            out,
            "Completed {} cycle{plural}. Well done.",
            summary.cycles
        )?,
        _ => writeln!(
            out,
            "Session ended after {} full cycle{plural}.",
            summary.cycles
        )?,
    }
    out.flush()?;
    Ok(summary)
}
