use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Destructive,
}

/// A short, non-blocking message for the user: a title and one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Info,
        }
    }

    /// Failure notice; the title is always "Error".
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            kind: NoticeKind::Destructive,
        }
    }

    pub fn entry_saved() -> Self {
        Self::info("Entry Saved", "Your journal entry has been saved.")
    }

    pub fn entry_deleted() -> Self {
        Self::info("Entry Deleted", "Your journal entry has been deleted.")
    }

    pub fn is_destructive(&self) -> bool {
        self.kind == NoticeKind::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Notice::entry_saved().to_string(),
            "Entry Saved: Your journal entry has been saved."
        );
    }

    #[test]
    fn test_error_is_destructive() {
        let n = Notice::error("disk full");
        assert!(n.is_destructive());
        assert_eq!(n.to_string(), "Error: disk full");
        assert!(!Notice::entry_deleted().is_destructive());
    }
}
