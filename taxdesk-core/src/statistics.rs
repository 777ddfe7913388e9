//! Dashboard statistics derived from practice records.
//!
//! | Counter | Counts |
//! |---------|--------|
//! | `total_clients` | every client |
//! | `pending_tasks` | tasks with status `Pending` |
//! | `upcoming_deadlines` | pending compliance items due between today and the window end, inclusive |
//! | `completed_returns` | completed `ITR` compliance items |
//! | `pending_notices` | notices with status `Received` |
//! | `overdue_compliances` | pending compliance items due strictly before today |
//!
//! "Today" is always supplied by the caller. An item due today is upcoming
//! but not overdue; an item due yesterday is overdue but not upcoming.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use taxdesk_core::models::{ComplianceItem, ComplianceStatus, ComplianceType};
//! use taxdesk_core::statistics::compute_snapshot;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
//! let items = vec![ComplianceItem {
//!     id: 1,
//!     client_id: 1,
//!     compliance_type: ComplianceType::Itr,
//!     due_date: today,
//!     status: ComplianceStatus::Pending,
//! }];
//!
//! let snapshot = compute_snapshot(&[], &[], &items, &[], today);
//!
//! assert_eq!(snapshot.upcoming_deadlines, 1);
//! assert_eq!(snapshot.overdue_compliances, 0);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    Client, ComplianceItem, ComplianceStatus, ComplianceType, Notice, NoticeStatus, Task,
    TaskStatus,
};

/// Default length of the upcoming-deadline window, in days.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;

/// Counters shown on the practice dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total_clients: usize,
    pub pending_tasks: usize,
    pub upcoming_deadlines: usize,
    pub completed_returns: usize,
    pub pending_notices: usize,
    pub overdue_compliances: usize,
}

/// Folds record collections into a [`StatisticsSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsAggregator {
    upcoming_window_days: u32,
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_UPCOMING_WINDOW_DAYS)
    }
}

impl StatisticsAggregator {
    /// Creates an aggregator whose upcoming window spans `upcoming_window_days`
    /// days after today, today included.
    pub fn new(upcoming_window_days: u32) -> Self {
        Self {
            upcoming_window_days,
        }
    }

    pub fn upcoming_window_days(&self) -> u32 {
        self.upcoming_window_days
    }

    /// Computes every counter over the supplied records.
    pub fn compute(
        &self,
        clients: &[Client],
        tasks: &[Task],
        compliance_items: &[ComplianceItem],
        notices: &[Notice],
        today: NaiveDate,
    ) -> StatisticsSnapshot {
        let unrecognised = compliance_items
            .iter()
            .filter(|item| matches!(item.status, ComplianceStatus::Other(_)))
            .count();
        if unrecognised > 0 {
            warn!(
                count = unrecognised,
                "compliance items with unrecognised status are excluded from deadline counts"
            );
        }

        let snapshot = StatisticsSnapshot {
            total_clients: clients.len(),
            pending_tasks: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Pending)
                .count(),
            upcoming_deadlines: compliance_items
                .iter()
                .filter(|item| self.is_upcoming(item, today))
                .count(),
            completed_returns: compliance_items
                .iter()
                .filter(|item| {
                    item.compliance_type == ComplianceType::Itr
                        && item.status == ComplianceStatus::Completed
                })
                .count(),
            pending_notices: notices
                .iter()
                .filter(|notice| notice.status == NoticeStatus::Received)
                .count(),
            overdue_compliances: compliance_items
                .iter()
                .filter(|item| is_overdue(item, today))
                .count(),
        };

        debug!(?snapshot, %today, "computed dashboard statistics");
        snapshot
    }

    /// Pending and due within `[today, today + window]`.
    fn is_upcoming(
        &self,
        item: &ComplianceItem,
        today: NaiveDate,
    ) -> bool {
        let days_until_due = (item.due_date - today).num_days();
        item.status == ComplianceStatus::Pending
            && (0..=i64::from(self.upcoming_window_days)).contains(&days_until_due)
    }
}

/// Pending and due strictly before today.
fn is_overdue(
    item: &ComplianceItem,
    today: NaiveDate,
) -> bool {
    item.status == ComplianceStatus::Pending && item.due_date < today
}

/// Computes the dashboard snapshot with the default seven-day window.
pub fn compute_snapshot(
    clients: &[Client],
    tasks: &[Task],
    compliance_items: &[ComplianceItem],
    notices: &[Notice],
    today: NaiveDate,
) -> StatisticsSnapshot {
    StatisticsAggregator::default().compute(clients, tasks, compliance_items, notices, today)
}
