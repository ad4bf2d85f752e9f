use std::path::Path;

use calm_core::{JournalDraft, JournalEntry, entry_timestamp};
use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::schema;

const ACTIVE_SESSION_KEY: &str = "active_session";

/// A signed-in user. Journal operations take one of these as proof of access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub created_at: String,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM metadata WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear_metadata(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM metadata WHERE key = ?1", [key])?;
        Ok(())
    }

    // --- Sessions ---

    /// Open a session for `name`, creating the user on first sign-in.
    /// Replaces any session that was already active.
    pub fn sign_in(&self, name: &str) -> Result<Session> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidData("user name is empty".to_string()));
        }

        let tx = self.conn.unchecked_transaction()?;

        if let Some(old) = self.get_metadata(ACTIVE_SESSION_KEY)? {
            tx.execute("DELETE FROM sessions WHERE token = ?1", [&old])?;
        }

        let existing: Option<String> = tx
            .query_row("SELECT id FROM users WHERE name = ?1", [name], |row| {
                row.get(0)
            })
            .optional()?;
        let user_id = match existing {
            Some(id) => parse_uuid(&id)?,
            None => {
                let id = Uuid::new_v4();
                tx.execute(
                    "INSERT INTO users (id, name, created_at) VALUES (?1, ?2, ?3)",
                    params![id.to_string(), name, entry_timestamp()],
                )?;
                tracing::info!("created user '{name}'");
                id
            }
        };

        let session = Session {
            token: Uuid::new_v4(),
            user_id,
            user_name: name.to_string(),
            created_at: entry_timestamp(),
        };
        tx.execute(
            "INSERT INTO sessions (token, user_id, created_at) VALUES (?1, ?2, ?3)",
            params![
                session.token.to_string(),
                session.user_id.to_string(),
                session.created_at
            ],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![ACTIVE_SESSION_KEY, session.token.to_string()],
        )?;
        tx.commit()?;

        tracing::debug!("session opened for '{name}'");
        Ok(session)
    }

    /// End the active session. Returns `false` when nobody was signed in.
    pub fn sign_out(&self) -> Result<bool> {
        let Some(token) = self.get_metadata(ACTIVE_SESSION_KEY)? else {
            return Ok(false);
        };
        self.conn
            .execute("DELETE FROM sessions WHERE token = ?1", [&token])?;
        self.clear_metadata(ACTIVE_SESSION_KEY)?;
        Ok(true)
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        let Some(token) = self.get_metadata(ACTIVE_SESSION_KEY)? else {
            return Ok(None);
        };
        let row: Option<(String, String, String, String)> = self
            .conn
            .query_row(
                "SELECT s.token, s.user_id, u.name, s.created_at
                 FROM sessions s JOIN users u ON u.id = s.user_id
                 WHERE s.token = ?1",
                [&token],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;

        match row {
            Some((token, user_id, user_name, created_at)) => Ok(Some(Session {
                token: parse_uuid(&token)?,
                user_id: parse_uuid(&user_id)?,
                user_name,
                created_at,
            })),
            None => {
                tracing::warn!("active session token has no session row; clearing it");
                self.clear_metadata(ACTIVE_SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    /// The active session, or [`StoreError::NotSignedIn`].
    pub fn require_session(&self) -> Result<Session> {
        self.current_session()?.ok_or(StoreError::NotSignedIn)
    }

    // --- Journal ---

    pub fn insert_entry(&self, session: &Session, draft: &JournalDraft) -> Result<JournalEntry> {
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            owner_id: session.user_id,
            content: draft.content().to_string(),
            created_at: entry_timestamp(),
        };
        self.conn.execute(
            "INSERT INTO journal_entries (id, user_id, content, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id.to_string(),
                entry.owner_id.to_string(),
                entry.content,
                entry.created_at,
            ],
        )?;
        Ok(entry)
    }

    /// Entries owned by `owner_id`, newest first. Entries written in the same
    /// second keep reverse insertion order.
    pub fn list_entries(&self, owner_id: Uuid) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, content, created_at FROM journal_entries
             WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows: Vec<(String, String, String, String)> = stmt
            .query_map([owner_id.to_string()], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<std::result::Result<_, _>>()?;

        rows.into_iter()
            .map(|(id, owner, content, created_at)| {
                Ok(JournalEntry {
                    id: parse_uuid(&id)?,
                    owner_id: parse_uuid(&owner)?,
                    content,
                    created_at,
                })
            })
            .collect()
    }

    /// Delete one of the session owner's entries.
    pub fn delete_entry(&self, session: &Session, entry_id: Uuid) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM journal_entries WHERE id = ?1 AND user_id = ?2",
            params![entry_id.to_string(), session.user_id.to_string()],
        )?;
        if deleted == 0 {
            return Err(StoreError::NotFound(entry_id.to_string()));
        }
        Ok(())
    }

    pub fn entry_count(&self, owner_id: Uuid) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM journal_entries WHERE user_id = ?1",
            [owner_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

fn parse_uuid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| StoreError::InvalidData(format!("bad uuid '{s}': {e}")))
}
