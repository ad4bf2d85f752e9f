//! Journal commands. Every path ends in a notice; store failures never
//! escape as errors, they are reported and turned into a failing exit code.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use calm_core::{JournalDraft, Notice};
use calm_store::{Session, Store, StoreError};
use uuid::Uuid;

use crate::views;

/// Result of a journal command: what to tell the user, and whether it failed.
pub struct Outcome {
    pub notice: Option<Notice>,
    pub success: bool,
}

impl Outcome {
    fn ok(notice: Option<Notice>) -> Self {
        Self {
            notice,
            success: true,
        }
    }

    fn failed(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            success: false,
        }
    }
}

impl From<StoreError> for Outcome {
    fn from(e: StoreError) -> Self {
        tracing::warn!("journal operation failed: {e}");
        match e {
            StoreError::NotSignedIn => Outcome::failed(Notice::error(
                "You need to sign in first. Run `calm login <name>` to open your journal.",
            )),
            other => Outcome::failed(Notice::error(other.to_string())),
        }
    }
}

fn session(store: &Store) -> std::result::Result<Session, Outcome> {
    store.require_session().map_err(Outcome::from)
}

/// Read the entry text from `text`, or from `input` when it's absent.
pub fn read_text<R: Read>(text: Option<String>, input: &mut R) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("failed to read entry from stdin")?;
            Ok(buf)
        }
    }
}

pub fn write(store: &Store, text: String) -> Outcome {
    let session = match session(store) {
        Ok(s) => s,
        Err(outcome) => return outcome,
    };
    let Some(draft) = JournalDraft::new(text) else {
        return Outcome::failed(Notice::error("Write something before saving."));
    };
    match store.insert_entry(&session, &draft) {
        Ok(entry) => {
            tracing::info!("saved journal entry {}", entry.id);
            Outcome::ok(Some(Notice::entry_saved()))
        }
        Err(e) => e.into(),
    }
}

pub fn list<W: Write>(store: &Store, out: &mut W, json: bool) -> Result<Outcome> {
    let session = match session(store) {
        Ok(s) => s,
        Err(outcome) => return Ok(outcome),
    };
    match store.list_entries(session.user_id) {
        Ok(entries) => {
            views::journal(out, &entries, json)?;
            Ok(Outcome::ok(None))
        }
        Err(e) => Ok(e.into()),
    }
}

pub fn delete(store: &Store, id: Uuid) -> Outcome {
    let session = match session(store) {
        Ok(s) => s,
        Err(outcome) => return outcome,
    };
    match store.delete_entry(&session, id) {
        Ok(()) => Outcome::ok(Some(Notice::entry_deleted())),
        Err(e) => e.into(),
    }
}
