//! Meeting lifecycle editor
//!
//! In-memory editors for the two sub-records a meeting accumulates:
//!
//! 1. [`AgendaBuilder`] - template selection and item editing, producing an
//!    [`nmp_domain::Agenda`]
//! 2. [`MinutesRecorder`] - per-agenda-item minutes capture with decisions,
//!    action items and votes, producing [`nmp_domain::Minutes`]
//!
//! All mutation is synchronous and local; nothing touches the network until
//! the caller saves the finished record through the client.

mod agenda;
mod error;
mod minutes;
mod step;
mod templates;

pub use agenda::AgendaBuilder;
pub use error::EditorError;
pub use minutes::{MinutesHeader, MinutesRecorder};
pub use step::{allowed_steps, validate_step, EditorStep};
pub use templates::{AgendaTemplate, TemplateKind};
