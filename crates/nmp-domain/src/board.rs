//! Board members, committees and term status

use crate::ids::{CommitteeId, MemberId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Board seat classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    /// Officer (president, secretary, treasurer)
    Officer,
    /// Director at large
    Director,
}

/// Derived term status for a board member
///
/// Computed from the term end date against the current date; `Expiring`
/// means fewer than 90 days remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermStatus {
    /// Term has ended
    Expired,
    /// Term ends within the warning window
    Expiring {
        /// Days remaining until the term ends
        days_left: i64,
    },
    /// Term is current
    Active,
}

/// Days remaining before `Active` flips to `Expiring`
pub const TERM_EXPIRY_WARNING_DAYS: i64 = 90;

impl TermStatus {
    /// Derive the status for a term ending on `term_end` as of `today`
    #[must_use]
    pub fn for_term_end(term_end: NaiveDate, today: NaiveDate) -> Self {
        let days_left = (term_end - today).num_days();
        if days_left < 0 {
            TermStatus::Expired
        } else if days_left < TERM_EXPIRY_WARNING_DAYS {
            TermStatus::Expiring { days_left }
        } else {
            TermStatus::Active
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            TermStatus::Expired => "Expired".to_string(),
            TermStatus::Expiring { days_left } => format!("{days_left} days left"),
            TermStatus::Active => "Active".to_string(),
        }
    }
}

/// A board member record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    /// Record id
    pub id: MemberId,
    /// Full name
    pub name: String,
    /// Board role title
    pub role: String,
    /// Seat classification
    #[serde(rename = "type")]
    pub member_type: MemberType,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Mailing address
    #[serde(default)]
    pub address: Option<String>,
    /// Term start date
    pub term_start: NaiveDate,
    /// Term end date
    pub term_end: NaiveDate,
    /// Committee memberships by name
    #[serde(default)]
    pub committees: Vec<String>,
    /// Listed qualifications
    #[serde(default)]
    pub qualifications: Vec<String>,
}

impl BoardMember {
    /// Derived term status as of `today`
    #[inline]
    #[must_use]
    pub fn term_status(&self, today: NaiveDate) -> TermStatus {
        TermStatus::for_term_end(self.term_end, today)
    }
}

/// A board committee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Committee {
    /// Record id
    pub id: CommitteeId,
    /// Committee name
    pub name: String,
    /// Charter summary
    #[serde(default)]
    pub description: String,
    /// Member names
    #[serde(default)]
    pub members: Vec<String>,
    /// Chair name, if assigned
    #[serde(default)]
    pub chair: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
    }

    #[test]
    fn term_ending_in_45_days_is_expiring() {
        let end = today().checked_add_days(Days::new(45)).unwrap();
        assert_eq!(
            TermStatus::for_term_end(end, today()),
            TermStatus::Expiring { days_left: 45 }
        );
    }

    #[test]
    fn term_ending_in_120_days_is_active() {
        let end = today().checked_add_days(Days::new(120)).unwrap();
        assert_eq!(TermStatus::for_term_end(end, today()), TermStatus::Active);
    }

    #[test]
    fn term_ended_5_days_ago_is_expired() {
        let end = today().checked_sub_days(Days::new(5)).unwrap();
        assert_eq!(TermStatus::for_term_end(end, today()), TermStatus::Expired);
    }

    #[test]
    fn term_ending_today_is_expiring() {
        assert_eq!(
            TermStatus::for_term_end(today(), today()),
            TermStatus::Expiring { days_left: 0 }
        );
    }

    #[test]
    fn member_wire_form_uses_camel_case() {
        let member = BoardMember {
            id: MemberId::new(),
            name: "Sarah Johnson".to_string(),
            role: "Board Chair".to_string(),
            member_type: MemberType::Officer,
            email: "sarah@example.org".to_string(),
            phone: None,
            address: None,
            term_start: "2024-01-15".parse().unwrap(),
            term_end: "2027-01-15".parse().unwrap(),
            committees: vec!["Executive".to_string()],
            qualifications: Vec::new(),
        };
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("\"termEnd\":\"2027-01-15\""));
        assert!(json.contains("\"type\":\"officer\""));
    }
}
