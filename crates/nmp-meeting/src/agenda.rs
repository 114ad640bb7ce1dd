//! Agenda wizard
//!
//! Two steps: pick a template (or start from scratch), then edit the item
//! list. Loading a template replaces the whole list; it never appends.

use crate::error::EditorError;
use crate::step::EditorStep;
use crate::templates::{AgendaTemplate, TemplateKind};
use chrono::{DateTime, Utc};
use nmp_domain::{Agenda, AgendaItem, AgendaItemId, AgendaItemType};

/// Default type for a freshly appended item
const DEFAULT_ITEM_TYPE: AgendaItemType = AgendaItemType::Discussion;
/// Default allotted minutes for a freshly appended item
const DEFAULT_ITEM_DURATION: u32 = 15;

/// In-memory agenda editor for one meeting
#[derive(Debug)]
pub struct AgendaBuilder {
    step: EditorStep,
    items: Vec<AgendaItem>,
}

impl AgendaBuilder {
    /// Open the wizard at template selection
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: EditorStep::TemplateSelect,
            items: Vec::new(),
        }
    }

    /// Current wizard step
    #[inline]
    #[must_use]
    pub fn step(&self) -> EditorStep {
        self.step
    }

    /// Items as currently edited
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[AgendaItem] {
        &self.items
    }

    /// Load a template, replacing any existing items, and move to editing
    pub fn load_template(&mut self, kind: TemplateKind) {
        self.items = AgendaTemplate::for_kind(kind).instantiate();
        self.step = EditorStep::AgendaEdit;
    }

    /// Skip templates and start editing an empty list
    pub fn start_from_scratch(&mut self) {
        self.items.clear();
        self.step = EditorStep::AgendaEdit;
    }

    /// Append a blank discussion item and return its id
    pub fn add_item(&mut self) -> AgendaItemId {
        let item = AgendaItem::new("", DEFAULT_ITEM_TYPE, DEFAULT_ITEM_DURATION);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Mutable access to one item for field updates
    pub fn item_mut(&mut self, id: AgendaItemId) -> Option<&mut AgendaItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove an item
    pub fn remove_item(&mut self, id: AgendaItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Sum of item durations in minutes
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.items.iter().map(|item| item.duration_minutes).sum()
    }

    /// Validate and produce the agenda record to attach to the meeting
    ///
    /// Every item needs a title; blank rows left over from `add_item` are a
    /// validation error, not silently dropped.
    pub fn finish(
        &self,
        created_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Agenda, EditorError> {
        if self.items.iter().any(|item| item.title.trim().is_empty()) {
            return Err(EditorError::MissingField("title"));
        }
        Ok(Agenda {
            items: self.items.clone(),
            created_by: created_by.into(),
            created_at: now,
        })
    }
}

impl Default for AgendaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
