use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact message lifecycle, independent of booking status. Moved only by
/// admin action in the console's contacts tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    Unread,
    Read,
    Replied,
}

impl ContactStatus {
    /// Which "mark as" actions the console renders: "Mark as Read" only while
    /// UNREAD, "Mark as Replied" until the message is REPLIED.
    pub fn can_mark(self, next: ContactStatus) -> bool {
        match next {
            ContactStatus::Read => self == ContactStatus::Unread,
            ContactStatus::Replied => self != ContactStatus::Replied,
            ContactStatus::Unread => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for the public contact form (`POST /api/contacts`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_as_read_only_from_unread() {
        assert!(ContactStatus::Unread.can_mark(ContactStatus::Read));
        assert!(!ContactStatus::Read.can_mark(ContactStatus::Read));
        assert!(!ContactStatus::Replied.can_mark(ContactStatus::Read));
    }

    #[test]
    fn mark_as_replied_until_replied() {
        assert!(ContactStatus::Unread.can_mark(ContactStatus::Replied));
        assert!(ContactStatus::Read.can_mark(ContactStatus::Replied));
        assert!(!ContactStatus::Replied.can_mark(ContactStatus::Replied));
    }

    #[test]
    fn nothing_moves_back_to_unread() {
        assert!(!ContactStatus::Read.can_mark(ContactStatus::Unread));
        assert!(!ContactStatus::Replied.can_mark(ContactStatus::Unread));
    }
}
