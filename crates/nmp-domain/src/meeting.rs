//! Meeting records: scheduling, agendas, minutes, votes
//!
//! A meeting is created bare, then an agenda is attached, then minutes are
//! recorded against the agenda. Agenda and minutes are optional sub-records
//! owned 1:1 by the meeting.

use crate::ids::{ActionItemId, AgendaItemId, MeetingId, VoteId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Meeting classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    /// Regular board meeting
    Regular,
    /// Special meeting (requires 48-hour notice per bylaws)
    Special,
    /// Committee meeting
    Committee,
    /// Annual meeting
    Annual,
}

impl MeetingType {
    /// Minimum notice in hours required before the scheduled start, if any
    #[inline]
    #[must_use]
    pub fn required_notice_hours(&self) -> Option<i64> {
        match self {
            MeetingType::Special => Some(48),
            _ => None,
        }
    }
}

/// Meeting lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// Scheduled and upcoming
    Scheduled,
    /// Held and closed out
    Completed,
    /// Cancelled before being held
    Cancelled,
}

/// Attendance status for a single attendee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Confirmed attendance
    Confirmed,
    /// Invited, not yet confirmed
    Pending,
    /// Declined
    Declined,
}

/// A meeting attendee entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    /// Display name
    pub name: String,
    /// Board role at time of the meeting
    #[serde(default)]
    pub role: String,
    /// Attendance status
    pub status: AttendanceStatus,
}

/// A board meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Record id
    pub id: MeetingId,
    /// Meeting title
    pub title: String,
    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Meeting classification
    pub meeting_type: MeetingType,
    /// Scheduled calendar date
    pub scheduled_date: NaiveDate,
    /// Scheduled start time
    pub scheduled_time: NaiveTime,
    /// Planned duration
    pub duration_minutes: u32,
    /// Physical location, if any
    #[serde(default)]
    pub location: Option<String>,
    /// Video-call URL, if any
    #[serde(default)]
    pub meeting_url: Option<String>,
    /// Lifecycle status
    pub status: MeetingStatus,
    /// Minimum attendee count for actions to be valid
    pub quorum_required: u32,
    /// Attached agenda, once built
    #[serde(default)]
    pub agenda: Option<Agenda>,
    /// Recorded minutes, once captured
    #[serde(default)]
    pub minutes: Option<Minutes>,
    /// Invited attendees
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl Meeting {
    /// Combined scheduled date and time
    #[inline]
    #[must_use]
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_date.and_time(self.scheduled_time)
    }

    /// Whole hours from `now` until the scheduled start (negative if past)
    #[must_use]
    pub fn hours_until_start(&self, now: DateTime<Utc>) -> i64 {
        (self.scheduled_at() - now.naive_utc()).num_hours()
    }

    /// Count of confirmed attendees
    #[must_use]
    pub fn confirmed_attendees(&self) -> usize {
        self.attendees
            .iter()
            .filter(|a| a.status == AttendanceStatus::Confirmed)
            .count()
    }
}

/// Agenda item classification, governing which minutes fields apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgendaItemType {
    /// Procedural item (call to order, adjournment)
    Procedural,
    /// Approval item (previous minutes, budgets)
    Approval,
    /// Report item
    Report,
    /// Open discussion
    Discussion,
    /// Formal vote
    Vote,
}

impl AgendaItemType {
    /// Whether minutes for this item may record votes
    #[inline]
    #[must_use]
    pub fn supports_votes(&self) -> bool {
        matches!(self, AgendaItemType::Vote | AgendaItemType::Approval)
    }
}

/// A single agenda entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Item id (client-generated)
    pub id: AgendaItemId,
    /// Item title
    pub title: String,
    /// Item classification
    #[serde(rename = "type")]
    pub item_type: AgendaItemType,
    /// Allotted minutes
    pub duration_minutes: u32,
    /// Presenter, if assigned
    #[serde(default)]
    pub presenter: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl AgendaItem {
    /// Create a blank item with the given title and type
    #[must_use]
    pub fn new(title: impl Into<String>, item_type: AgendaItemType, duration_minutes: u32) -> Self {
        Self {
            id: AgendaItemId::new(),
            title: title.into(),
            item_type,
            duration_minutes,
            presenter: String::new(),
            notes: String::new(),
        }
    }
}

/// An agenda attached to a meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agenda {
    /// Ordered agenda items
    pub items: Vec<AgendaItem>,
    /// Author
    pub created_by: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Agenda {
    /// Sum of item durations in minutes
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.items.iter().map(|i| i.duration_minutes).sum()
    }
}

/// A follow-up task recorded in the minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Item id (client-generated)
    pub id: ActionItemId,
    /// Task description (required non-empty)
    pub task: String,
    /// Assigned person
    #[serde(default)]
    pub assignee: String,
    /// Due date, if set
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A recorded vote on a motion
///
/// `passed` is set by the recording operator, not derived from the tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    /// Vote id (client-generated)
    pub id: VoteId,
    /// Motion text
    pub motion: String,
    /// Votes in favor
    pub in_favor: u32,
    /// Votes against
    pub against: u32,
    /// Abstentions
    pub abstain: u32,
    /// Outcome as recorded by the operator
    pub passed: bool,
}

impl Vote {
    /// Create a blank vote with zeroed tallies
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: VoteId::new(),
            motion: String::new(),
            in_favor: 0,
            against: 0,
            abstain: 0,
            passed: false,
        }
    }

    /// Whether the tallies alone favor the motion
    ///
    /// Convenience only; `passed` is authoritative.
    #[inline]
    #[must_use]
    pub fn tallies_favor(&self) -> bool {
        self.in_favor > self.against
    }
}

impl Default for Vote {
    fn default() -> Self {
        Self::new()
    }
}

/// Minutes recorded for a single agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinutesItem {
    /// The agenda item these minutes cover
    pub agenda_item_id: AgendaItemId,
    /// Discussion summary
    #[serde(default)]
    pub discussion: String,
    /// Decisions reached, in order
    #[serde(default)]
    pub decisions: Vec<String>,
    /// Follow-up tasks
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    /// Recorded votes (only for vote/approval items)
    #[serde(default)]
    pub votes: Vec<Vote>,
}

impl MinutesItem {
    /// Blank minutes entry for the given agenda item
    #[must_use]
    pub fn for_agenda_item(agenda_item_id: AgendaItemId) -> Self {
        Self {
            agenda_item_id,
            discussion: String::new(),
            decisions: Vec::new(),
            action_items: Vec::new(),
            votes: Vec::new(),
        }
    }
}

/// Minutes attached to a meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minutes {
    /// Names of members present
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Names of members absent
    #[serde(default)]
    pub absent: Vec<String>,
    /// Time the meeting was called to order, as entered
    #[serde(default)]
    pub meeting_called_to_order: String,
    /// Time the meeting was adjourned, as entered
    #[serde(default)]
    pub meeting_adjourned: String,
    /// Whether quorum was met
    pub quorum_met: bool,
    /// Per-agenda-item minutes
    #[serde(default)]
    pub items: Vec<MinutesItem>,
    /// General notes
    #[serde(default)]
    pub notes: String,
    /// Recording author
    pub created_by: String,
    /// Last save timestamp
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn meeting_at(date: &str, time: &str) -> Meeting {
        Meeting {
            id: MeetingId::new(),
            title: "Board Meeting".to_string(),
            description: None,
            meeting_type: MeetingType::Regular,
            scheduled_date: date.parse().unwrap(),
            scheduled_time: time.parse().unwrap(),
            duration_minutes: 90,
            location: None,
            meeting_url: None,
            status: MeetingStatus::Scheduled,
            quorum_required: 4,
            agenda: None,
            minutes: None,
            attendees: Vec::new(),
        }
    }

    #[test]
    fn hours_until_start() {
        let meeting = meeting_at("2025-08-10", "14:00:00");
        let now = Utc.with_ymd_and_hms(2025, 8, 8, 14, 0, 0).unwrap();
        assert_eq!(meeting.hours_until_start(now), 48);

        let later = Utc.with_ymd_and_hms(2025, 8, 10, 16, 0, 0).unwrap();
        assert!(meeting.hours_until_start(later) < 0);
    }

    #[test]
    fn special_meetings_require_notice() {
        assert_eq!(MeetingType::Special.required_notice_hours(), Some(48));
        assert_eq!(MeetingType::Regular.required_notice_hours(), None);
        assert_eq!(MeetingType::Annual.required_notice_hours(), None);
    }

    #[test]
    fn vote_tallies_do_not_drive_passed() {
        let mut vote = Vote::new();
        vote.in_favor = 5;
        vote.against = 1;
        assert!(vote.tallies_favor());
        // Outcome stays whatever the operator recorded.
        assert!(!vote.passed);
    }

    #[test]
    fn only_vote_and_approval_items_support_votes() {
        assert!(AgendaItemType::Vote.supports_votes());
        assert!(AgendaItemType::Approval.supports_votes());
        assert!(!AgendaItemType::Discussion.supports_votes());
        assert!(!AgendaItemType::Report.supports_votes());
        assert!(!AgendaItemType::Procedural.supports_votes());
    }

    #[test]
    fn agenda_total_duration_sums_items() {
        let agenda = Agenda {
            items: vec![
                AgendaItem::new("Call to Order", AgendaItemType::Procedural, 5),
                AgendaItem::new("Financial Report", AgendaItemType::Report, 20),
            ],
            created_by: "secretary".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(agenda.total_duration(), 25);
    }

    #[test]
    fn meeting_round_trips_through_json() {
        let meeting = meeting_at("2025-09-01", "10:30:00");
        let json = serde_json::to_string(&meeting).unwrap();
        assert!(json.contains("\"meeting_type\":\"regular\""));
        let back: Meeting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meeting);
    }

    #[test]
    fn agenda_item_type_uses_wire_name() {
        let item = AgendaItem::new("Voting", AgendaItemType::Vote, 15);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"vote\""));
    }
}
