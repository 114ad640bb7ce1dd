//! Compliance deadlines, areas and audit trail

use crate::ids::{AreaId, AuditEntryId, DeadlineId};
use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Compliance deadline category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineCategory {
    /// Federal filings (IRS, etc.)
    Federal,
    /// State filings
    State,
    /// Governance requirements
    Governance,
    /// Financial oversight
    Financial,
}

/// Deadline workflow status as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// Not started
    Pending,
    /// Being worked
    InProgress,
    /// Done
    Completed,
    /// Past due
    Overdue,
}

/// Deadline priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

/// Cadence at which a deadline regenerates after completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringPattern {
    /// One-shot deadline
    None,
    /// Every month
    Monthly,
    /// Every quarter
    Quarterly,
    /// Every year
    Yearly,
}

impl RecurringPattern {
    /// Next due date after `from`, or `None` for one-shot deadlines
    #[must_use]
    pub fn next_due(&self, from: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            RecurringPattern::None => return None,
            RecurringPattern::Monthly => 1,
            RecurringPattern::Quarterly => 3,
            RecurringPattern::Yearly => 12,
        };
        from.checked_add_months(Months::new(months))
    }
}

/// A compliance deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDeadline {
    /// Record id
    pub id: DeadlineId,
    /// Deadline title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Due date
    pub due_date: NaiveDate,
    /// Category
    pub category: DeadlineCategory,
    /// Stored workflow status
    pub status: DeadlineStatus,
    /// Priority
    pub priority: Priority,
    /// Responsible person
    #[serde(default)]
    pub responsible: String,
    /// Estimated effort in hours
    #[serde(default)]
    pub estimated_hours: Option<u32>,
    /// Regeneration cadence
    #[serde(default)]
    pub recurring_pattern: RecurringPattern,
}

impl Default for RecurringPattern {
    fn default() -> Self {
        RecurringPattern::None
    }
}

impl ComplianceDeadline {
    /// Days from `today` until the due date (negative if past)
    #[inline]
    #[must_use]
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Whether the deadline is past due and not completed
    #[inline]
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != DeadlineStatus::Completed && self.due_date < today
    }

    /// Status with overdue derived from the due date
    ///
    /// The stored status may lag reality; classification prefers the clock.
    #[must_use]
    pub fn classified_status(&self, today: NaiveDate) -> DeadlineStatus {
        if self.is_overdue(today) {
            DeadlineStatus::Overdue
        } else {
            self.status
        }
    }
}

/// Aggregate metrics over a deadline collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplianceMetrics {
    /// All deadlines
    pub total: usize,
    /// Completed deadlines
    pub completed: usize,
    /// Overdue deadlines (derived, see [`ComplianceDeadline::is_overdue`])
    pub overdue: usize,
    /// Non-completed deadlines due within 30 days
    pub upcoming: usize,
}

impl ComplianceMetrics {
    /// Compute metrics for `deadlines` as of `today`
    #[must_use]
    pub fn for_deadlines(deadlines: &[ComplianceDeadline], today: NaiveDate) -> Self {
        let mut metrics = Self {
            total: deadlines.len(),
            ..Self::default()
        };
        for deadline in deadlines {
            if deadline.status == DeadlineStatus::Completed {
                metrics.completed += 1;
                continue;
            }
            if deadline.is_overdue(today) {
                metrics.overdue += 1;
            }
            if deadline.days_until_due(today) <= 30 {
                metrics.upcoming += 1;
            }
        }
        metrics
    }

    /// Completed share as a whole percentage
    #[must_use]
    pub fn completion_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed * 100 / self.total) as u32
    }
}

/// First `limit` non-completed deadlines ordered by due date
#[must_use]
pub fn upcoming_deadlines(
    deadlines: &[ComplianceDeadline],
    limit: usize,
) -> Vec<&ComplianceDeadline> {
    let mut upcoming: Vec<&ComplianceDeadline> = deadlines
        .iter()
        .filter(|d| d.status != DeadlineStatus::Completed)
        .collect();
    upcoming.sort_by_key(|d| d.due_date);
    upcoming.truncate(limit);
    upcoming
}

/// Compliance area review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaStatus {
    /// In good standing
    Compliant,
    /// Needs attention before the next review
    AttentionNeeded,
    /// Out of compliance
    NonCompliant,
}

/// Risk classification for a compliance area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

/// A tracked compliance area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceArea {
    /// Record id
    pub id: AreaId,
    /// Area name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Requirement checklist
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Last review date
    pub last_review: NaiveDate,
    /// Next scheduled review
    pub next_review: NaiveDate,
    /// Review status
    pub status: AreaStatus,
    /// Risk level
    pub risk_level: RiskLevel,
}

/// An audit-trail entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Record id
    pub id: AuditEntryId,
    /// What happened
    pub action: String,
    /// Who did it
    pub user: String,
    /// When
    pub timestamp: DateTime<Utc>,
    /// Entry category
    #[serde(default)]
    pub category: String,
    /// Free-form details
    #[serde(default)]
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
    }

    fn deadline(due: NaiveDate, status: DeadlineStatus) -> ComplianceDeadline {
        ComplianceDeadline {
            id: DeadlineId::new(),
            title: "Form 990 Filing".to_string(),
            description: None,
            due_date: due,
            category: DeadlineCategory::Federal,
            status,
            priority: Priority::High,
            responsible: "Treasurer".to_string(),
            estimated_hours: Some(12),
            recurring_pattern: RecurringPattern::Yearly,
        }
    }

    #[test]
    fn due_yesterday_and_not_completed_is_overdue() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let d = deadline(yesterday, DeadlineStatus::Pending);
        assert!(d.is_overdue(today()));
        assert_eq!(d.classified_status(today()), DeadlineStatus::Overdue);

        let done = deadline(yesterday, DeadlineStatus::Completed);
        assert!(!done.is_overdue(today()));
        assert_eq!(done.classified_status(today()), DeadlineStatus::Completed);
    }

    #[test]
    fn metrics_count_overdue_and_upcoming() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let next_week = today().checked_add_days(Days::new(7)).unwrap();
        let far_out = today().checked_add_days(Days::new(60)).unwrap();
        let deadlines = vec![
            deadline(yesterday, DeadlineStatus::Pending),
            deadline(next_week, DeadlineStatus::InProgress),
            deadline(far_out, DeadlineStatus::Pending),
            deadline(next_week, DeadlineStatus::Completed),
        ];
        let metrics = ComplianceMetrics::for_deadlines(&deadlines, today());
        assert_eq!(metrics.total, 4);
        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.overdue, 1);
        // Overdue deadlines also count as due within 30 days.
        assert_eq!(metrics.upcoming, 2);
        assert_eq!(metrics.completion_percentage(), 25);
    }

    #[test]
    fn upcoming_excludes_completed_and_sorts_by_due_date() {
        let d1 = deadline(
            today().checked_add_days(Days::new(20)).unwrap(),
            DeadlineStatus::Pending,
        );
        let d2 = deadline(
            today().checked_add_days(Days::new(3)).unwrap(),
            DeadlineStatus::InProgress,
        );
        let d3 = deadline(
            today().checked_add_days(Days::new(1)).unwrap(),
            DeadlineStatus::Completed,
        );
        let all = vec![d1.clone(), d2.clone(), d3];
        let upcoming = upcoming_deadlines(&all, 5);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, d2.id);
        assert_eq!(upcoming[1].id, d1.id);
    }

    #[test]
    fn recurring_pattern_next_due() {
        let due = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
        assert_eq!(RecurringPattern::None.next_due(due), None);
        assert_eq!(
            RecurringPattern::Monthly.next_due(due),
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
        assert_eq!(
            RecurringPattern::Quarterly.next_due(due),
            NaiveDate::from_ymd_opt(2025, 8, 15)
        );
        assert_eq!(
            RecurringPattern::Yearly.next_due(due),
            NaiveDate::from_ymd_opt(2026, 5, 15)
        );
    }

    #[test]
    fn deadline_wire_form_uses_camel_case() {
        let d = deadline(today(), DeadlineStatus::InProgress);
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"dueDate\":\"2025-08-06\""));
        assert!(json.contains("\"recurringPattern\":\"yearly\""));
        assert!(json.contains("\"status\":\"in_progress\""));
    }
}
