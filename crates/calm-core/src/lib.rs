//! Core logic for the calm wellness toolkit.
//!
//! Holds the box-breathing phase cycle timer, the fixed reference catalogs
//! (therapy tools, support groups, music and yoga sessions), and the journal
//! and notice types shared by the store and the CLI.
//!
//! Zero I/O: no clocks are read here except in [`time`], and nothing touches
//! the filesystem or the terminal.

pub mod catalog;
pub mod journal;
pub mod notice;
pub mod phase;
pub mod time;
pub mod timer;

pub use catalog::{
    MUSIC_TRACKS, SUPPORT_GROUPS, SupportGroup, THERAPY_TOOLS, TherapyTool, Video, YOGA_SESSIONS,
    find_group,
};
pub use journal::{JournalDraft, JournalEntry};
pub use notice::{Notice, NoticeKind};
pub use phase::{DEFAULT_PHASE_SECS, PHASE_COUNT, Pattern, PatternError, Phase};
pub use time::{display_timestamp, entry_timestamp};
pub use timer::{PhaseTimer, TickOutcome, TimerSnapshot};
