use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of regulatory filing a compliance item tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplianceType {
    /// Income tax return.
    Itr,
    Gst,
    /// Tax deducted at source return.
    Tds,
    /// Advance tax instalment.
    AdvanceTax,
    Other(String),
}

impl ComplianceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Itr => "ITR",
            Self::Gst => "GST",
            Self::Tds => "TDS",
            Self::AdvanceTax => "Advance Tax",
            Self::Other(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "ITR" => Self::Itr,
            "GST" => Self::Gst,
            "TDS" => Self::Tds,
            "Advance Tax" => Self::AdvanceTax,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ComplianceType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ComplianceType> for String {
    fn from(kind: ComplianceType) -> Self {
        kind.as_str().to_string()
    }
}

/// Filing state of a compliance item.
///
/// Labels are matched exactly; anything unrecognised is kept verbatim as
/// [`ComplianceStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplianceStatus {
    Pending,
    Completed,
    Other(String),
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Other(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ComplianceStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ComplianceStatus> for String {
    fn from(status: ComplianceStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: i64,
    pub client_id: i64,
    pub compliance_type: ComplianceType,
    pub due_date: NaiveDate,
    pub status: ComplianceStatus,
}
