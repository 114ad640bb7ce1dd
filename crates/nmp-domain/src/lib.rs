//! NMP domain model
//!
//! Entities and derived logic shared by the client and the application core:
//! - Meetings, agendas, minutes, votes and action items
//! - Document storage metadata
//! - Board members, committees and term status
//! - Compliance deadlines, areas and audit trail
//! - Dashboard aggregates and search payloads
//!
//! Wire casing follows the backend: meeting and document records use
//! snake_case fields, board and compliance records use camelCase.

pub mod board;
pub mod compliance;
pub mod dashboard;
pub mod document;
pub mod filter;
pub mod ids;
pub mod meeting;
pub mod search;
pub mod user;

pub use board::{BoardMember, Committee, MemberType, TermStatus};
pub use compliance::{
    upcoming_deadlines, AreaStatus, AuditEntry, ComplianceArea, ComplianceDeadline,
    ComplianceMetrics, DeadlineCategory, DeadlineStatus, Priority, RecurringPattern, RiskLevel,
};
pub use dashboard::{ActivityEntry, DashboardData, DashboardStats};
pub use document::{format_file_size, Document, DocumentCategory};
pub use filter::matches_search;
pub use ids::{
    ActionItemId, AgendaItemId, AreaId, AuditEntryId, CommitteeId, DeadlineId, DocumentId,
    MeetingId, MemberId, UserId, VoteId,
};
pub use meeting::{
    ActionItem, Agenda, AgendaItem, AgendaItemType, AttendanceStatus, Attendee, Meeting,
    MeetingStatus, MeetingType, Minutes, MinutesItem, Vote,
};
pub use search::{SearchKind, SearchRequest, SearchResponse};
pub use user::{Credentials, User};
