//! Typed record identifiers
//!
//! Newtypes over UUIDs so a meeting id cannot be passed where a document id
//! is expected. Backend-assigned ids deserialize into the same types;
//! client-side ids (agenda items, votes, action items) are generated locally.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh id
            #[inline]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(
    /// Meeting identifier
    MeetingId
);
define_id!(
    /// Agenda item identifier (client-generated)
    AgendaItemId
);
define_id!(
    /// Action item identifier (client-generated)
    ActionItemId
);
define_id!(
    /// Vote identifier (client-generated)
    VoteId
);
define_id!(
    /// Document identifier
    DocumentId
);
define_id!(
    /// Board member identifier
    MemberId
);
define_id!(
    /// Committee identifier
    CommitteeId
);
define_id!(
    /// Compliance deadline identifier
    DeadlineId
);
define_id!(
    /// Compliance area identifier
    AreaId
);
define_id!(
    /// Audit-trail entry identifier
    AuditEntryId
);
define_id!(
    /// User identifier
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(MeetingId::new(), MeetingId::new());
        assert_ne!(AgendaItemId::new(), AgendaItemId::new());
    }

    #[test]
    fn id_serializes_transparently() {
        let id = DocumentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
    }
}
