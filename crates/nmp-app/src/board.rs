//! Board manager

use crate::error::AppError;
use chrono::NaiveDate;
use nmp_client::ApiClient;
use nmp_domain::{matches_search, BoardMember, Committee, MemberType, TermStatus};
use serde::Serialize;

/// New-member form state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mailing address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Term start date (required before submit)
    pub term_start: Option<NaiveDate>,
    /// Term end date (required before submit)
    pub term_end: Option<NaiveDate>,
    /// Committee memberships by name
    pub committees: Vec<String>,
    /// Listed qualifications
    pub qualifications: Vec<String>,
}

impl NewMember {
    /// Empty form
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>, member_type: MemberType) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            member_type,
            email: String::new(),
            phone: None,
            address: None,
            term_start: None,
            term_end: None,
            committees: Vec::new(),
            qualifications: Vec::new(),
        }
    }

    /// Client-side validation, run before any network call
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Member name is required".to_string()));
        }
        if self.role.trim().is_empty() {
            return Err(AppError::Validation("Board role is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation(
                "A valid email address is required".to_string(),
            ));
        }
        if self.term_start.is_none() || self.term_end.is_none() {
            return Err(AppError::Validation(
                "Term start and end dates are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Counts of members by derived term status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermStatusCounts {
    /// Members with a current term
    pub active: usize,
    /// Members within the expiry warning window
    pub expiring: usize,
    /// Members whose term has ended
    pub expired: usize,
}

/// Board list view state and operations
#[derive(Debug, Default)]
pub struct BoardManager {
    members: Vec<BoardMember>,
    committees: Vec<Committee>,
    search: String,
    type_filter: Option<MemberType>,
    last_error: Option<String>,
}

impl BoardManager {
    /// Manager seeded with initial collections
    #[must_use]
    pub fn new(members: Vec<BoardMember>, committees: Vec<Committee>) -> Self {
        Self {
            members,
            committees,
            ..Self::default()
        }
    }

    /// Current member roster
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[BoardMember] {
        &self.members
    }

    /// Current committees
    #[inline]
    #[must_use]
    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    /// Set the search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set or clear the officer/director filter
    pub fn set_type_filter(&mut self, filter: Option<MemberType>) {
        self.type_filter = filter;
    }

    /// Members matching the search text and type filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&BoardMember> {
        self.members
            .iter()
            .filter(|m| {
                matches_search(&self.search, &[m.name.as_str(), m.role.as_str()])
                    && self.type_filter.map_or(true, |t| m.member_type == t)
            })
            .collect()
    }

    /// Member counts by derived term status as of `today`
    #[must_use]
    pub fn term_status_counts(&self, today: NaiveDate) -> TermStatusCounts {
        let mut counts = TermStatusCounts::default();
        for member in &self.members {
            match member.term_status(today) {
                TermStatus::Active => counts.active += 1,
                TermStatus::Expiring { .. } => counts.expiring += 1,
                TermStatus::Expired => counts.expired += 1,
            }
        }
        counts
    }

    /// Members whose term has not ended as of `today`
    #[must_use]
    pub fn active_directors(&self, today: NaiveDate) -> usize {
        self.members
            .iter()
            .filter(|m| m.term_status(today) != TermStatus::Expired)
            .count()
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

    /// Refetch members and committees, keeping stale data on failure
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), AppError> {
        let members = client.board_members(&[]).await;
        let committees = client.committees().await;
        match (members, committees) {
            (Ok(members), Ok(committees)) => {
                self.members = members;
                self.committees = committees;
                self.last_error = None;
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(error = %err, "board refetch failed, keeping stale roster");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Validate and add a member, then refetch the roster
    pub async fn add_member(
        &mut self,
        client: &ApiClient,
        form: &NewMember,
    ) -> Result<BoardMember, AppError> {
        form.validate()?;
        let created = client.add_board_member(form).await?;
        tracing::info!(name = %created.name, "board member added");
        self.refresh(client).await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use nmp_test_utils::fixtures;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
    }

    #[test]
    fn term_status_counts_split_the_roster() {
        let manager = BoardManager::new(
            vec![
                fixtures::board_member(
                    "Sarah Johnson",
                    "Board Chair",
                    today().checked_add_days(Days::new(120)).unwrap(),
                ),
                fixtures::board_member(
                    "Michael Chen",
                    "Treasurer",
                    today().checked_add_days(Days::new(45)).unwrap(),
                ),
                fixtures::board_member(
                    "Robert Kim",
                    "Director",
                    today().checked_sub_days(Days::new(5)).unwrap(),
                ),
            ],
            Vec::new(),
        );

        let counts = manager.term_status_counts(today());
        assert_eq!(
            counts,
            TermStatusCounts {
                active: 1,
                expiring: 1,
                expired: 1
            }
        );
        assert_eq!(manager.active_directors(today()), 2);
    }

    #[test]
    fn filtered_matches_name_or_role() {
        let mut manager = BoardManager::new(
            vec![
                fixtures::board_member("Sarah Johnson", "Board Chair", today()),
                fixtures::board_member("Michael Chen", "Treasurer", today()),
            ],
            Vec::new(),
        );

        manager.set_search("treasurer");
        assert_eq!(manager.filtered().len(), 1);
        assert_eq!(manager.filtered()[0].name, "Michael Chen");
    }

    #[test]
    fn validation_requires_contact_and_term() {
        let mut form = NewMember::new("Dana Ortiz", "Director", MemberType::Director);
        form.email = "not-an-email".to_string();
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));

        form.email = "dana@example.org".to_string();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Term start and end dates are required"
        );

        form.term_start = Some(today());
        form.term_end = today().checked_add_days(Days::new(730));
        assert!(form.validate().is_ok());
    }
}
