//! Meeting manager
//!
//! Owns the meeting collection, the list filters, and the two lifecycle
//! editors. Creation enforces required fields and the 48-hour notice rule
//! for special meetings before anything goes over the wire.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use nmp_client::ApiClient;
use nmp_domain::{matches_search, Agenda, Meeting, MeetingId, MeetingStatus, MeetingType, Minutes};
use nmp_meeting::{AgendaBuilder, EditorStep, MinutesRecorder};
use serde::Serialize;

/// New-meeting form state
#[derive(Debug, Clone, Serialize)]
pub struct NewMeeting {
    /// Meeting title
    pub title: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Meeting classification
    pub meeting_type: MeetingType,
    /// Scheduled date (required before submit)
    pub scheduled_date: Option<NaiveDate>,
    /// Scheduled start time (required before submit)
    pub scheduled_time: Option<NaiveTime>,
    /// Planned duration
    pub duration_minutes: u32,
    /// Physical location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Video-call URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    /// Quorum requirement
    pub quorum_required: u32,
}

impl NewMeeting {
    /// Empty form with the usual defaults
    #[must_use]
    pub fn new(title: impl Into<String>, meeting_type: MeetingType) -> Self {
        Self {
            title: title.into(),
            description: None,
            meeting_type,
            scheduled_date: None,
            scheduled_time: None,
            duration_minutes: 60,
            location: None,
            meeting_url: None,
            quorum_required: 0,
        }
    }

    /// Client-side validation, run before any network call
    ///
    /// Special meetings must start at least 48 hours after `now`.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Meeting title is required".to_string()));
        }
        let (date, time) = match (self.scheduled_date, self.scheduled_time) {
            (Some(date), Some(time)) => (date, time),
            _ => {
                return Err(AppError::Validation(
                    "Meeting date and time are required".to_string(),
                ))
            }
        };
        if self.duration_minutes == 0 {
            return Err(AppError::Validation(
                "Meeting duration must be positive".to_string(),
            ));
        }
        if let Some(required) = self.meeting_type.required_notice_hours() {
            let minutes_until = (date.and_time(time) - now.naive_utc()).num_minutes();
            if minutes_until < required * 60 {
                return Err(AppError::BusinessRule(
                    "Special meetings require 48-hour notice per bylaws".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Meeting list view state and operations
#[derive(Debug, Default)]
pub struct MeetingManager {
    meetings: Vec<Meeting>,
    search: String,
    status_filter: Option<MeetingStatus>,
    last_error: Option<String>,
}

impl MeetingManager {
    /// Manager seeded with an initial collection
    #[must_use]
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings,
            ..Self::default()
        }
    }

    /// Current collection
    #[inline]
    #[must_use]
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Look up one meeting
    #[must_use]
    pub fn meeting(&self, id: MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// Set the search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set or clear the status filter
    pub fn set_status_filter(&mut self, filter: Option<MeetingStatus>) {
        self.status_filter = filter;
    }

    /// Meetings matching the search text and status filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&Meeting> {
        self.meetings
            .iter()
            .filter(|m| {
                let description = m.description.as_deref().unwrap_or("");
                matches_search(&self.search, &[m.title.as_str(), description])
                    && self.status_filter.map_or(true, |s| m.status == s)
            })
            .collect()
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

    /// Refetch the whole collection
    ///
    /// On failure the previous collection stays in place and the banner is
    /// raised.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), AppError> {
        match client.meetings(&[]).await {
            Ok(meetings) => {
                self.meetings = meetings;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "meeting refetch failed, keeping stale list");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Validate and create a meeting, then refetch the collection
    pub async fn create(
        &mut self,
        client: &ApiClient,
        form: &NewMeeting,
        now: DateTime<Utc>,
    ) -> Result<Meeting, AppError> {
        form.validate(now)?;
        let created = client.create_meeting(form).await?;
        tracing::info!(title = %created.title, "meeting created");
        self.refresh(client).await?;
        Ok(created)
    }

    /// Open the agenda wizard for a meeting that has no agenda yet
    pub fn begin_agenda(&self, id: MeetingId) -> Result<AgendaBuilder, AppError> {
        let meeting = self
            .meeting(id)
            .ok_or_else(|| AppError::Validation("Unknown meeting".to_string()))?;
        match EditorStep::entry_for(meeting) {
            Some(EditorStep::TemplateSelect) => Ok(AgendaBuilder::new()),
            _ => Err(AppError::Validation(
                "This meeting already has an agenda".to_string(),
            )),
        }
    }

    /// Open the minutes recorder for a meeting with an agenda and no minutes
    pub fn begin_minutes(&self, id: MeetingId) -> Result<MinutesRecorder, AppError> {
        let meeting = self
            .meeting(id)
            .ok_or_else(|| AppError::Validation("Unknown meeting".to_string()))?;
        match EditorStep::entry_for(meeting) {
            Some(EditorStep::MinutesCapture) => {
                MinutesRecorder::new(meeting).map_err(|err| AppError::Validation(err.to_string()))
            }
            Some(EditorStep::TemplateSelect) => Err(AppError::Validation(
                "Create an agenda before recording minutes".to_string(),
            )),
            _ => Err(AppError::Validation(
                "Minutes have already been recorded".to_string(),
            )),
        }
    }

    /// Attach a finished agenda to the meeting and refetch
    pub async fn save_agenda(
        &mut self,
        client: &ApiClient,
        id: MeetingId,
        agenda: Agenda,
    ) -> Result<(), AppError> {
        let mut meeting = self
            .meeting(id)
            .ok_or_else(|| AppError::Validation("Unknown meeting".to_string()))?
            .clone();
        meeting.agenda = Some(agenda);
        client.update_meeting(id, &meeting).await?;
        self.refresh(client).await
    }

    /// Attach finished minutes to the meeting and refetch
    pub async fn save_minutes(
        &mut self,
        client: &ApiClient,
        id: MeetingId,
        minutes: Minutes,
    ) -> Result<(), AppError> {
        let mut meeting = self
            .meeting(id)
            .ok_or_else(|| AppError::Validation("Unknown meeting".to_string()))?
            .clone();
        if meeting.agenda.is_none() {
            return Err(AppError::Validation(
                "Create an agenda before recording minutes".to_string(),
            ));
        }
        meeting.minutes = Some(minutes);
        client.update_meeting(id, &meeting).await?;
        self.refresh(client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use nmp_test_utils::fixtures;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
    }

    fn special_form(start: DateTime<Utc>) -> NewMeeting {
        let mut form = NewMeeting::new("Emergency Session", MeetingType::Special);
        form.scheduled_date = Some(start.date_naive());
        form.scheduled_time = Some(start.time());
        form.quorum_required = 4;
        form
    }

    #[test]
    fn special_meeting_under_48_hours_is_a_business_rule_error() {
        let form = special_form(now() + Duration::hours(24));
        let err = form.validate(now()).unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));
        assert!(err.is_local());
        assert_eq!(
            err.to_string(),
            "Special meetings require 48-hour notice per bylaws"
        );
    }

    #[test]
    fn special_meeting_with_enough_notice_passes() {
        let form = special_form(now() + Duration::hours(49));
        assert!(form.validate(now()).is_ok());
    }

    #[test]
    fn regular_meeting_needs_no_notice() {
        let mut form = NewMeeting::new("Regular Session", MeetingType::Regular);
        let start = now() + Duration::hours(2);
        form.scheduled_date = Some(start.date_naive());
        form.scheduled_time = Some(start.time());
        assert!(form.validate(now()).is_ok());
    }

    #[test]
    fn missing_title_and_schedule_are_validation_errors() {
        let form = NewMeeting::new("", MeetingType::Regular);
        assert!(matches!(
            form.validate(now()),
            Err(AppError::Validation(_))
        ));

        let form = NewMeeting::new("Untimed", MeetingType::Regular);
        let err = form.validate(now()).unwrap_err();
        assert_eq!(err.to_string(), "Meeting date and time are required");
    }

    #[test]
    fn filtered_matches_title_or_description_and_status() {
        let mut manager = MeetingManager::new(vec![
            fixtures::meeting("Q3 Board Meeting", "2025-09-01", "18:00:00"),
            fixtures::meeting("Budget Workshop", "2025-09-15", "10:00:00"),
        ]);

        manager.set_search("budget");
        assert_eq!(manager.filtered().len(), 1);
        assert_eq!(manager.filtered()[0].title, "Budget Workshop");

        manager.set_search("");
        manager.set_status_filter(Some(MeetingStatus::Completed));
        assert!(manager.filtered().is_empty());
    }

    #[test]
    fn begin_minutes_requires_an_agenda_first() {
        let bare = fixtures::meeting("No Agenda Yet", "2025-09-01", "18:00:00");
        let id = bare.id;
        let manager = MeetingManager::new(vec![bare]);

        let err = manager.begin_minutes(id).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Create an agenda before recording minutes"
        );
        assert!(manager.begin_agenda(id).is_ok());
    }

    #[test]
    fn begin_agenda_rejects_meetings_that_already_have_one() {
        let meeting = fixtures::meeting_with_agenda("With Agenda", "2025-09-01", "18:00:00");
        let id = meeting.id;
        let manager = MeetingManager::new(vec![meeting]);

        assert!(manager.begin_agenda(id).is_err());
        assert!(manager.begin_minutes(id).is_ok());
    }
}
