//! Listings for the static catalogs and the journal, as text or JSON.

use std::io::Write;

use anyhow::Result;
use calm_core::{
    JournalEntry, MUSIC_TRACKS, Notice, NoticeKind, SUPPORT_GROUPS, THERAPY_TOOLS, Video,
    YOGA_SESSIONS, display_timestamp,
};
use serde::Serialize;

pub const EMPTY_JOURNAL: &str = "No journal entries yet. Start writing to track your thoughts!";

const GROUPS_SAFETY: &str = "All support groups are moderated and maintain strict anonymity. \
Share openly in a judgment-free environment.";

const GROUPS_CRISIS: &str = "Support groups are moderated 24/7 to ensure a safe and supportive \
environment. If you're experiencing a crisis, please contact emergency services or a crisis \
hotline immediately.";

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn tools<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        return write_json(out, THERAPY_TOOLS);
    }
    writeln!(out, "Therapy Tools")?;
    writeln!(
        out,
        "Explore our collection of guided tools to support your mental wellness journey\n"
    )?;
    for tool in THERAPY_TOOLS {
        writeln!(out, "{}  ({})", tool.title, tool.command)?;
        writeln!(out, "  {}", tool.description)?;
    }
    Ok(())
}

pub fn groups<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        return write_json(out, SUPPORT_GROUPS);
    }
    writeln!(out, "Join Support Groups")?;
    writeln!(out, "Safe & Anonymous: {GROUPS_SAFETY}\n")?;
    for group in SUPPORT_GROUPS {
        writeln!(
            out,
            "[{}] {}  ({}, {} members, {} online)",
            group.id, group.name, group.topic, group.members, group.online
        )?;
        writeln!(out, "    {}", group.description)?;
    }
    writeln!(out, "\n{GROUPS_CRISIS}")?;
    Ok(())
}

fn videos<W: Write>(out: &mut W, title: &str, intro: &str, list: &[Video]) -> Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{intro}\n")?;
    for video in list {
        match video.duration {
            Some(d) => writeln!(out, "{}  ({d})", video.title)?,
            None => writeln!(out, "{}", video.title)?,
        }
        writeln!(out, "  {}", video.description)?;
        writeln!(out, "  {}", video.url())?;
    }
    Ok(())
}

pub fn music<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        return write_json(out, MUSIC_TRACKS);
    }
    videos(
        out,
        "Calming Music",
        "Curated collection of soothing music for relaxation and stress relief",
        MUSIC_TRACKS,
    )
}

pub fn yoga<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        return write_json(out, YOGA_SESSIONS);
    }
    videos(
        out,
        "Yoga Therapy",
        "Guided yoga sessions for physical and mental wellness",
        YOGA_SESSIONS,
    )
}

pub fn journal<W: Write>(out: &mut W, entries: &[JournalEntry], json: bool) -> Result<()> {
    if json {
        return write_json(out, entries);
    }
    writeln!(out, "Past Entries")?;
    if entries.is_empty() {
        writeln!(out, "{EMPTY_JOURNAL}")?;
        return Ok(());
    }
    for entry in entries {
        writeln!(
            out,
            "\n{}  [{}]",
            display_timestamp(&entry.created_at),
            entry.id
        )?;
        writeln!(out, "{}", entry.content)?;
    }
    Ok(())
}

/// Informational notices go to `out`, destructive ones to `err`.
pub fn notice<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    notice: &Notice,
    json: bool,
) -> Result<()> {
    let target: &mut dyn Write = match notice.kind {
        NoticeKind::Info => out,
        NoticeKind::Destructive => err,
    };
    if json {
        serde_json::to_writer(&mut *target, notice)?;
        writeln!(target)?;
    } else {
        writeln!(target, "{notice}")?;
    }
    Ok(())
}
