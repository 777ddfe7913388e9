mod client;
mod compliance_item;
mod notice;
mod task;

pub use client::Client;
pub use compliance_item::{ComplianceItem, ComplianceStatus, ComplianceType};
pub use notice::{Notice, NoticeStatus};
pub use task::{Task, TaskStatus};
