use serde::{Deserialize, Serialize};

/// Handling state of a notice issued by the tax department.
///
/// Labels are matched exactly; anything unrecognised is kept verbatim as
/// [`NoticeStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoticeStatus {
    Received,
    InProgress,
    Responded,
    Closed,
    Other(String),
}

impl NoticeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Received => "Received",
            Self::InProgress => "In Progress",
            Self::Responded => "Responded",
            Self::Closed => "Closed",
            Self::Other(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Received" => Self::Received,
            "In Progress" => Self::InProgress,
            "Responded" => Self::Responded,
            "Closed" => Self::Closed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NoticeStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<NoticeStatus> for String {
    fn from(status: NoticeStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub client_id: i64,
    pub subject: String,
    pub status: NoticeStatus,
}
