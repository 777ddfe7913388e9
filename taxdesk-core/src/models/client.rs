use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,

    /// Permanent Account Number.
    pub pan: Option<String>,
    pub email: Option<String>,
}
