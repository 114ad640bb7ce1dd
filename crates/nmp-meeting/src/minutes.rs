//! Minutes recorder
//!
//! Walks the agenda item by item and captures discussion, decisions, action
//! items and votes for each. Navigation is bounded: previous at the first
//! item and next at the last are no-ops, never wraparound.

use crate::error::EditorError;
use chrono::{DateTime, NaiveDate, Utc};
use nmp_domain::{
    ActionItem, ActionItemId, AgendaItem, Meeting, Minutes, MinutesItem, Vote, VoteId,
};

/// Header fields recorded once per meeting
#[derive(Debug, Default, Clone)]
pub struct MinutesHeader {
    /// Names of members present
    pub attendees: Vec<String>,
    /// Names of members absent
    pub absent: Vec<String>,
    /// Call-to-order time as entered
    pub called_to_order: String,
    /// Adjournment time as entered
    pub adjourned: String,
    /// Whether quorum was met
    pub quorum_met: bool,
    /// General notes
    pub notes: String,
}

/// In-memory minutes editor for one meeting
#[derive(Debug)]
pub struct MinutesRecorder {
    agenda_items: Vec<AgendaItem>,
    header: MinutesHeader,
    items: Vec<MinutesItem>,
    current: usize,
}

impl MinutesRecorder {
    /// Open the recorder for `meeting`
    ///
    /// Requires an agenda with at least one item. Existing minutes are
    /// resumed: saved entries are matched to agenda items by id and blanks
    /// are seeded for any item without one.
    pub fn new(meeting: &Meeting) -> Result<Self, EditorError> {
        let agenda = meeting.agenda.as_ref().ok_or(EditorError::MissingAgenda)?;
        if agenda.items.is_empty() {
            return Err(EditorError::MissingAgenda);
        }

        let saved = meeting.minutes.as_ref();
        let items = agenda
            .items
            .iter()
            .map(|agenda_item| {
                saved
                    .and_then(|m| {
                        m.items
                            .iter()
                            .find(|i| i.agenda_item_id == agenda_item.id)
                            .cloned()
                    })
                    .unwrap_or_else(|| MinutesItem::for_agenda_item(agenda_item.id))
            })
            .collect();
        let header = saved
            .map(|m| MinutesHeader {
                attendees: m.attendees.clone(),
                absent: m.absent.clone(),
                called_to_order: m.meeting_called_to_order.clone(),
                adjourned: m.meeting_adjourned.clone(),
                quorum_met: m.quorum_met,
                notes: m.notes.clone(),
            })
            .unwrap_or_default();

        Ok(Self {
            agenda_items: agenda.items.clone(),
            header,
            items,
            current: 0,
        })
    }

    /// Number of agenda items being minuted
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.agenda_items.len()
    }

    /// Index of the item currently being edited
    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The agenda item currently being minuted
    #[must_use]
    pub fn current_agenda_item(&self) -> &AgendaItem {
        &self.agenda_items[self.current]
    }

    /// The minutes entry currently being edited
    #[must_use]
    pub fn current_item(&self) -> &MinutesItem {
        &self.items[self.current]
    }

    /// Header fields for editing
    pub fn header_mut(&mut self) -> &mut MinutesHeader {
        &mut self.header
    }

    /// Move to the next agenda item; no-op at the last
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.items.len() - 1);
    }

    /// Move to the previous agenda item; no-op at the first
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump directly to an item index; out-of-range indexes are ignored
    pub fn jump_to(&mut self, index: usize) {
        if index < self.items.len() {
            self.current = index;
        }
    }

    /// Set the discussion summary for the current item
    pub fn set_discussion(&mut self, text: impl Into<String>) {
        self.items[self.current].discussion = text.into();
    }

    /// Append a decision to the current item
    pub fn add_decision(&mut self, text: impl Into<String>) {
        self.items[self.current].decisions.push(text.into());
    }

    /// Replace a decision's text
    pub fn set_decision(&mut self, index: usize, text: impl Into<String>) {
        if let Some(decision) = self.items[self.current].decisions.get_mut(index) {
            *decision = text.into();
        }
    }

    /// Remove a decision from the current item
    pub fn remove_decision(&mut self, index: usize) {
        let decisions = &mut self.items[self.current].decisions;
        if index < decisions.len() {
            decisions.remove(index);
        }
    }

    /// Record an action item against the current item
    ///
    /// The task description is required non-empty.
    pub fn add_action_item(
        &mut self,
        task: impl Into<String>,
        assignee: impl Into<String>,
        due_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<ActionItemId, EditorError> {
        let task = task.into();
        if task.trim().is_empty() {
            return Err(EditorError::MissingField("task"));
        }
        let action = ActionItem {
            id: ActionItemId::new(),
            task,
            assignee: assignee.into(),
            due_date,
            created_at: now,
        };
        let id = action.id;
        self.items[self.current].action_items.push(action);
        Ok(id)
    }

    /// Record a blank vote against the current item
    ///
    /// Only vote and approval agenda items take votes.
    pub fn add_vote(&mut self) -> Result<VoteId, EditorError> {
        let item_type = self.current_agenda_item().item_type;
        if !item_type.supports_votes() {
            return Err(EditorError::VotesNotAllowed(item_type));
        }
        let vote = Vote::new();
        let id = vote.id;
        self.items[self.current].votes.push(vote);
        Ok(id)
    }

    /// Mutable access to a vote on the current item
    pub fn vote_mut(&mut self, id: VoteId) -> Option<&mut Vote> {
        self.items[self.current].votes.iter_mut().find(|v| v.id == id)
    }

    /// Produce the minutes record to attach to the meeting
    #[must_use]
    pub fn finish(&self, created_by: impl Into<String>, now: DateTime<Utc>) -> Minutes {
        Minutes {
            attendees: self.header.attendees.clone(),
            absent: self.header.absent.clone(),
            meeting_called_to_order: self.header.called_to_order.clone(),
            meeting_adjourned: self.header.adjourned.clone(),
            quorum_met: self.header.quorum_met,
            items: self.items.clone(),
            notes: self.header.notes.clone(),
            created_by: created_by.into(),
            last_updated: now,
        }
    }
}
