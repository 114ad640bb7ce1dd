//! Sample domain records

use chrono::{NaiveDate, Utc};
use nmp_domain::{
    Agenda, AgendaItem, AgendaItemType, BoardMember, ComplianceDeadline, DeadlineCategory,
    DeadlineId, DeadlineStatus, Document, DocumentCategory, DocumentId, Meeting, MeetingId,
    MeetingStatus, MeetingType, MemberId, MemberType, Priority, RecurringPattern,
};

pub fn meeting(title: &str, date: &str, time: &str) -> Meeting {
    Meeting {
        id: MeetingId::new(),
        title: title.to_string(),
        description: Some("Sample meeting".to_string()),
        meeting_type: MeetingType::Regular,
        scheduled_date: date.parse().unwrap(),
        scheduled_time: time.parse().unwrap(),
        duration_minutes: 90,
        location: Some("Community Center".to_string()),
        meeting_url: None,
        status: MeetingStatus::Scheduled,
        quorum_required: 4,
        agenda: None,
        minutes: None,
        attendees: Vec::new(),
    }
}

pub fn meeting_with_agenda(title: &str, date: &str, time: &str) -> Meeting {
    let mut meeting = meeting(title, date, time);
    meeting.agenda = Some(Agenda {
        items: vec![
            AgendaItem::new("Call to Order", AgendaItemType::Procedural, 5),
            AgendaItem::new("Budget Approval", AgendaItemType::Approval, 20),
            AgendaItem::new("New Business", AgendaItemType::Discussion, 30),
        ],
        created_by: "Emily Rodriguez".to_string(),
        created_at: Utc::now(),
    });
    meeting
}

pub fn document(title: &str, category: DocumentCategory, file_name: &str) -> Document {
    Document {
        id: DocumentId::new(),
        title: title.to_string(),
        category,
        file_name: file_name.to_string(),
        file_size: 245_760,
        file_type: "application/pdf".to_string(),
        version: 1,
        is_current_version: true,
        description: None,
    }
}

pub fn board_member(name: &str, role: &str, term_end: NaiveDate) -> BoardMember {
    BoardMember {
        id: MemberId::new(),
        name: name.to_string(),
        role: role.to_string(),
        member_type: MemberType::Director,
        email: format!(
            "{}@example.org",
            name.to_lowercase().replace(' ', ".")
        ),
        phone: None,
        address: None,
        term_start: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        term_end,
        committees: Vec::new(),
        qualifications: Vec::new(),
    }
}

pub fn deadline(title: &str, due_date: NaiveDate, status: DeadlineStatus) -> ComplianceDeadline {
    ComplianceDeadline {
        id: DeadlineId::new(),
        title: title.to_string(),
        description: None,
        due_date,
        category: DeadlineCategory::Federal,
        status,
        priority: Priority::High,
        responsible: "Treasurer".to_string(),
        estimated_hours: Some(8),
        recurring_pattern: RecurringPattern::None,
    }
}
