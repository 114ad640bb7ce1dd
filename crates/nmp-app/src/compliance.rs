//! Compliance manager

use crate::error::AppError;
use chrono::NaiveDate;
use nmp_client::ApiClient;
use nmp_domain::{
    matches_search, upcoming_deadlines, AuditEntry, ComplianceArea, ComplianceDeadline,
    ComplianceMetrics, DeadlineCategory, DeadlineId, DeadlineStatus, Priority, RecurringPattern,
};
use serde::Serialize;
use serde_json::json;

/// New-deadline form state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeadline {
    /// Deadline title
    pub title: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date (required before submit)
    pub due_date: Option<NaiveDate>,
    /// Category
    pub category: DeadlineCategory,
    /// Priority
    pub priority: Priority,
    /// Responsible person
    pub responsible: String,
    /// Estimated effort in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
    /// Regeneration cadence
    pub recurring_pattern: RecurringPattern,
}

impl NewDeadline {
    /// Empty form with medium priority and no recurrence
    #[must_use]
    pub fn new(title: impl Into<String>, category: DeadlineCategory) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            category,
            priority: Priority::Medium,
            responsible: String::new(),
            estimated_hours: None,
            recurring_pattern: RecurringPattern::None,
        }
    }

    /// Client-side validation, run before any network call
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation(
                "Deadline title is required".to_string(),
            ));
        }
        if self.due_date.is_none() {
            return Err(AppError::Validation("A due date is required".to_string()));
        }
        Ok(())
    }
}

/// Compliance view state and operations
#[derive(Debug, Default)]
pub struct ComplianceManager {
    deadlines: Vec<ComplianceDeadline>,
    areas: Vec<ComplianceArea>,
    audit_trail: Vec<AuditEntry>,
    search: String,
    status_filter: Option<DeadlineStatus>,
    last_error: Option<String>,
}

impl ComplianceManager {
    /// Manager seeded with an initial deadline collection
    #[must_use]
    pub fn new(deadlines: Vec<ComplianceDeadline>) -> Self {
        Self {
            deadlines,
            ..Self::default()
        }
    }

    /// Current deadlines
    #[inline]
    #[must_use]
    pub fn deadlines(&self) -> &[ComplianceDeadline] {
        &self.deadlines
    }

    /// Current compliance areas
    #[inline]
    #[must_use]
    pub fn areas(&self) -> &[ComplianceArea] {
        &self.areas
    }

    /// Current audit trail
    #[inline]
    #[must_use]
    pub fn audit_trail(&self) -> &[AuditEntry] {
        &self.audit_trail
    }

    /// Set the search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set or clear the status filter
    pub fn set_status_filter(&mut self, filter: Option<DeadlineStatus>) {
        self.status_filter = filter;
    }

    /// Deadlines matching the search text and status filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&ComplianceDeadline> {
        self.deadlines
            .iter()
            .filter(|d| {
                let description = d.description.as_deref().unwrap_or("");
                matches_search(&self.search, &[d.title.as_str(), description])
                    && self.status_filter.map_or(true, |s| d.status == s)
            })
            .collect()
    }

    /// Aggregate metrics as of `today`
    #[must_use]
    pub fn metrics(&self, today: NaiveDate) -> ComplianceMetrics {
        ComplianceMetrics::for_deadlines(&self.deadlines, today)
    }

    /// The next five open deadlines by due date
    #[must_use]
    pub fn upcoming(&self) -> Vec<&ComplianceDeadline> {
        upcoming_deadlines(&self.deadlines, 5)
    }

    /// Current error banner
    #[inline]
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Dismiss the error banner
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Refetch deadlines (and best-effort areas/audit), keeping stale data
    /// on failure
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), AppError> {
        match client.deadlines(&[]).await {
            Ok(deadlines) => {
                self.deadlines = deadlines;
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "deadline refetch failed, keeping stale list");
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        }
        // Secondary panels refresh best-effort; the deadline list is the
        // view's source of truth.
        if let Ok(areas) = client.compliance_areas().await {
            self.areas = areas;
        }
        if let Ok(audit) = client.audit_trail(&[]).await {
            self.audit_trail = audit;
        }
        Ok(())
    }

    /// Validate and create a deadline, then refetch
    pub async fn create(
        &mut self,
        client: &ApiClient,
        form: &NewDeadline,
    ) -> Result<ComplianceDeadline, AppError> {
        form.validate()?;
        let created = client.create_deadline(form).await?;
        tracing::info!(title = %created.title, "compliance deadline created");
        self.refresh(client).await?;
        Ok(created)
    }

    /// Mark a deadline complete, then refetch
    ///
    /// For recurring deadlines the follow-up due date is returned so the
    /// view can prompt for the next cycle.
    pub async fn complete(
        &mut self,
        client: &ApiClient,
        id: DeadlineId,
        completed_by: &str,
    ) -> Result<Option<NaiveDate>, AppError> {
        let completed = client
            .complete_deadline(id, &json!({ "completed_by": completed_by }))
            .await?;
        let next_due = completed.recurring_pattern.next_due(completed.due_date);
        if let Some(next) = next_due {
            tracing::info!(title = %completed.title, %next, "recurring deadline rolls over");
        }
        self.refresh(client).await?;
        Ok(next_due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use nmp_test_utils::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
    }

    #[test]
    fn overdue_deadline_counts_in_the_metric() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let manager = ComplianceManager::new(vec![
            fixtures::deadline("Form 990 Filing", yesterday, DeadlineStatus::Pending),
            fixtures::deadline(
                "State Report",
                today().checked_add_days(Days::new(10)).unwrap(),
                DeadlineStatus::Completed,
            ),
        ]);

        let metrics = manager.metrics(today());
        assert_eq!(metrics.overdue, 1);
        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.total, 2);
    }

    #[test]
    fn filtered_matches_search_and_status() {
        let mut manager = ComplianceManager::new(vec![
            fixtures::deadline("Form 990 Filing", today(), DeadlineStatus::Pending),
            fixtures::deadline("Board Review", today(), DeadlineStatus::InProgress),
        ]);

        manager.set_search("990");
        assert_eq!(manager.filtered().len(), 1);

        manager.set_search("");
        manager.set_status_filter(Some(DeadlineStatus::InProgress));
        assert_eq!(manager.filtered().len(), 1);
        assert_eq!(manager.filtered()[0].title, "Board Review");
    }

    #[test]
    fn validation_requires_title_and_due_date() {
        let form = NewDeadline::new("", DeadlineCategory::Federal);
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));

        let mut form = NewDeadline::new("Form 990 Filing", DeadlineCategory::Federal);
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "A due date is required"
        );
        form.due_date = Some(today());
        assert!(form.validate().is_ok());
    }
}
