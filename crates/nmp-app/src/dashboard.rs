//! Dashboard manager
//!
//! The dashboard renders the backend's aggregate payload. After local
//! mutations the shell recomputes the same stats from the managers so the
//! counts stay fresh without waiting on another round trip.

use crate::board::BoardManager;
use crate::compliance::ComplianceManager;
use crate::documents::DocumentManager;
use crate::error::AppError;
use crate::meetings::MeetingManager;
use chrono::{DateTime, Utc};
use nmp_client::ApiClient;
use nmp_domain::{DashboardData, DashboardStats, MeetingStatus};

/// Dashboard view state
#[derive(Debug, Default)]
pub struct DashboardManager {
    data: DashboardData,
    last_error: Option<String>,
}

impl DashboardManager {
    /// Empty dashboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dashboard payload
    #[inline]
    #[must_use]
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    /// Current error banner
    #[inline]
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Refetch the aggregate payload, keeping stale data on failure
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), AppError> {
        match client.dashboard().await {
            Ok(data) => {
                self.data = data;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "dashboard refetch failed, keeping stale stats");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Recompute the headline stats from the managers' local collections
    pub fn recompute_local(
        &mut self,
        meetings: &MeetingManager,
        documents: &DocumentManager,
        board: &BoardManager,
        compliance: &ComplianceManager,
        now: DateTime<Utc>,
    ) {
        self.data.stats = local_stats(meetings, documents, board, compliance, now);
    }
}

/// Headline stats computed from local collections
#[must_use]
pub fn local_stats(
    meetings: &MeetingManager,
    documents: &DocumentManager,
    board: &BoardManager,
    compliance: &ComplianceManager,
    now: DateTime<Utc>,
) -> DashboardStats {
    let next_meeting = meetings
        .meetings()
        .iter()
        .filter(|m| m.status == MeetingStatus::Scheduled && m.scheduled_at() >= now.naive_utc())
        .min_by_key(|m| m.scheduled_at())
        .cloned();
    let today = now.date_naive();
    DashboardStats {
        next_meeting,
        active_directors: board.active_directors(today) as u32,
        total_documents: documents.documents().len() as u32,
        compliance_percentage: compliance.metrics(today).completion_percentage(),
    }
}
