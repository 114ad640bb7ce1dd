//! Dashboard aggregates

use crate::meeting::Meeting;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline stats shown on the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// The next scheduled meeting, if any
    #[serde(default)]
    pub next_meeting: Option<Meeting>,
    /// Directors with an active term
    #[serde(default)]
    pub active_directors: u32,
    /// Stored document count
    #[serde(default)]
    pub total_documents: u32,
    /// Completed share of compliance deadlines, whole percent
    #[serde(default)]
    pub compliance_percentage: u32,
}

/// A recent-activity feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// What happened
    pub action: String,
    /// Who did it
    #[serde(default)]
    pub user: String,
    /// When
    pub timestamp: DateTime<Utc>,
    /// Free-form details
    #[serde(default)]
    pub details: String,
}

/// Payload of `GET /dashboard`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Headline stats
    #[serde(default)]
    pub stats: DashboardStats,
    /// Next few meetings
    #[serde(default)]
    pub upcoming_meetings: Vec<Meeting>,
    /// Recent activity feed
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}
