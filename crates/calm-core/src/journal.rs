use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Stored exactly as written, including surrounding whitespace.
    pub content: String,
    /// ISO-8601 UTC.
    pub created_at: String,
}

/// Text that is allowed to be saved: not blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDraft(String);

impl JournalDraft {
    /// Returns `None` for empty or whitespace-only text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn content(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_rejected() {
        assert!(JournalDraft::new("").is_none());
        assert!(JournalDraft::new("   \n\t").is_none());
    }

    #[test]
    fn test_draft_keeps_whitespace() {
        let draft = JournalDraft::new("  felt calmer today\n").unwrap();
        assert_eq!(draft.content(), "  felt calmer today\n");
    }
}
