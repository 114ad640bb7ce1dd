//! Editor step machine
//!
//! `TemplateSelect -> AgendaEdit -> MinutesCapture`. The first two steps are
//! only entered while the meeting has no agenda; minutes capture requires an
//! agenda and no minutes yet.

use crate::error::EditorError;
use nmp_domain::Meeting;

/// A step of the lifecycle editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorStep {
    /// Choosing an agenda template (or starting from scratch)
    TemplateSelect,
    /// Editing the agenda item list
    AgendaEdit,
    /// Recording minutes against the agenda
    MinutesCapture,
}

impl EditorStep {
    /// The step a meeting's editor opens at, if any editing applies
    ///
    /// A meeting with both agenda and minutes has nothing left to edit.
    #[must_use]
    pub fn entry_for(meeting: &Meeting) -> Option<Self> {
        if meeting.agenda.is_none() {
            Some(EditorStep::TemplateSelect)
        } else if meeting.minutes.is_none() {
            Some(EditorStep::MinutesCapture)
        } else {
            None
        }
    }
}

/// Steps reachable from `from`
#[must_use]
pub fn allowed_steps(from: EditorStep) -> Vec<EditorStep> {
    use EditorStep::*;
    match from {
        TemplateSelect => vec![AgendaEdit],
        AgendaEdit => vec![],
        MinutesCapture => vec![],
    }
}

/// Validate a step transition
pub fn validate_step(from: EditorStep, to: EditorStep) -> Result<(), EditorError> {
    if allowed_steps(from).contains(&to) {
        Ok(())
    } else {
        Err(EditorError::IllegalStep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nmp_domain::{Agenda, Minutes};

    fn bare_meeting() -> Meeting {
        Meeting {
            id: nmp_domain::MeetingId::new(),
            title: "Q3 Board Meeting".to_string(),
            description: None,
            meeting_type: nmp_domain::MeetingType::Regular,
            scheduled_date: "2025-09-01".parse().unwrap(),
            scheduled_time: "18:00:00".parse().unwrap(),
            duration_minutes: 120,
            location: None,
            meeting_url: None,
            status: nmp_domain::MeetingStatus::Scheduled,
            quorum_required: 4,
            agenda: None,
            minutes: None,
            attendees: Vec::new(),
        }
    }

    fn empty_agenda() -> Agenda {
        Agenda {
            items: Vec::new(),
            created_by: "secretary".to_string(),
            created_at: Utc::now(),
        }
    }

    fn empty_minutes() -> Minutes {
        Minutes {
            attendees: Vec::new(),
            absent: Vec::new(),
            meeting_called_to_order: String::new(),
            meeting_adjourned: String::new(),
            quorum_met: false,
            items: Vec::new(),
            notes: String::new(),
            created_by: "secretary".to_string(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn entry_follows_what_the_meeting_lacks() {
        let mut meeting = bare_meeting();
        assert_eq!(
            EditorStep::entry_for(&meeting),
            Some(EditorStep::TemplateSelect)
        );

        meeting.agenda = Some(empty_agenda());
        assert_eq!(
            EditorStep::entry_for(&meeting),
            Some(EditorStep::MinutesCapture)
        );

        meeting.minutes = Some(empty_minutes());
        assert_eq!(EditorStep::entry_for(&meeting), None);
    }

    #[test]
    fn template_select_only_advances_to_agenda_edit() {
        assert!(validate_step(EditorStep::TemplateSelect, EditorStep::AgendaEdit).is_ok());
        assert!(
            validate_step(EditorStep::TemplateSelect, EditorStep::MinutesCapture).is_err()
        );
        assert!(validate_step(EditorStep::AgendaEdit, EditorStep::TemplateSelect).is_err());
    }
}
