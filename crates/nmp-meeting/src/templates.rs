//! Agenda templates
//!
//! Named seed lists for the agenda wizard. Instantiating a template
//! generates fresh item ids with presenter and notes left blank.

use nmp_domain::{AgendaItem, AgendaItemType};

/// Built-in template names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Regular board meeting
    Regular,
    /// Special meeting
    Special,
    /// Annual meeting
    Annual,
}

impl TemplateKind {
    /// All built-in templates, in display order
    #[must_use]
    pub fn all() -> [TemplateKind; 3] {
        [TemplateKind::Regular, TemplateKind::Special, TemplateKind::Annual]
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Regular => "Regular Meeting",
            TemplateKind::Special => "Special Meeting",
            TemplateKind::Annual => "Annual Meeting",
        }
    }
}

/// Seed entry: title, type and allotted minutes
type Seed = (&'static str, AgendaItemType, u32);

/// An agenda template
#[derive(Debug, Clone, Copy)]
pub struct AgendaTemplate {
    kind: TemplateKind,
    seeds: &'static [Seed],
}

const REGULAR: &[Seed] = &[
    ("Call to Order", AgendaItemType::Procedural, 5),
    ("Approval of Previous Minutes", AgendaItemType::Approval, 10),
    ("Financial Report", AgendaItemType::Report, 20),
    ("Committee Reports", AgendaItemType::Report, 30),
    ("Old Business", AgendaItemType::Discussion, 20),
    ("New Business", AgendaItemType::Discussion, 30),
    ("Adjournment", AgendaItemType::Procedural, 5),
];

const SPECIAL: &[Seed] = &[
    ("Call to Order", AgendaItemType::Procedural, 5),
    ("Statement of Purpose", AgendaItemType::Procedural, 10),
    ("Special Business Item", AgendaItemType::Discussion, 45),
    ("Voting", AgendaItemType::Vote, 15),
    ("Adjournment", AgendaItemType::Procedural, 5),
];

const ANNUAL: &[Seed] = &[
    ("Call to Order", AgendaItemType::Procedural, 5),
    ("Approval of Previous Minutes", AgendaItemType::Approval, 10),
    ("Annual Reports", AgendaItemType::Report, 45),
    ("Election of Directors", AgendaItemType::Vote, 30),
    ("Other Business", AgendaItemType::Discussion, 20),
    ("Adjournment", AgendaItemType::Procedural, 5),
];

impl AgendaTemplate {
    /// The template for `kind`
    #[must_use]
    pub fn for_kind(kind: TemplateKind) -> Self {
        let seeds = match kind {
            TemplateKind::Regular => REGULAR,
            TemplateKind::Special => SPECIAL,
            TemplateKind::Annual => ANNUAL,
        };
        Self { kind, seeds }
    }

    /// Template name
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Number of seeded items
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.seeds.len()
    }

    /// Sum of seeded durations in minutes
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.seeds.iter().map(|(_, _, duration)| duration).sum()
    }

    /// Instantiate the seeds as fresh agenda items
    #[must_use]
    pub fn instantiate(&self) -> Vec<AgendaItem> {
        self.seeds
            .iter()
            .map(|&(title, item_type, duration)| AgendaItem::new(title, item_type, duration))
            .collect()
    }
}
