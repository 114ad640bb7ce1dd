//! NMP backend client
//!
//! One canonical HTTP client for the NMP REST backend:
//! - Base URL fixed at construction ([`ClientConfig`], `NMP_API_URL` override)
//! - Bearer token attached from an injected [`SessionStore`]
//! - JSON/text response normalization
//! - HTTP statuses mapped to the typed [`ApiError`] taxonomy
//! - 401 tears the stored session down and surfaces [`ApiError::AuthRequired`]
//!
//! Session state is an explicit injected object, never a process-wide
//! singleton; callers own the store and can observe teardown.

mod client;
mod config;
mod endpoints;
mod error;
mod session;

pub use client::ApiClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
