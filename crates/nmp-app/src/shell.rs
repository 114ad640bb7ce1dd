//! Application shell
//!
//! Composition root: holds the client, the session gate and the per-module
//! managers, and keeps the dashboard counts fresh after mutations.

use crate::board::BoardManager;
use crate::compliance::ComplianceManager;
use crate::dashboard::DashboardManager;
use crate::documents::DocumentManager;
use crate::error::AppError;
use crate::meetings::MeetingManager;
use chrono::Utc;
use nmp_client::{ApiClient, Session};
use nmp_domain::Credentials;

/// Top-level module switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Aggregate overview
    #[default]
    Dashboard,
    /// Meeting scheduling and lifecycle
    Meetings,
    /// Document storage metadata
    Documents,
    /// Board roster and committees
    Board,
    /// Compliance deadlines
    Compliance,
}

/// The application shell
#[derive(Debug)]
pub struct App {
    client: ApiClient,
    module: Module,
    /// Meeting module state
    pub meetings: MeetingManager,
    /// Document module state
    pub documents: DocumentManager,
    /// Board module state
    pub board: BoardManager,
    /// Compliance module state
    pub compliance: ComplianceManager,
    /// Dashboard state
    pub dashboard: DashboardManager,
}

impl App {
    /// Shell over `client` with empty collections
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            module: Module::default(),
            meetings: MeetingManager::default(),
            documents: DocumentManager::default(),
            board: BoardManager::default(),
            compliance: ComplianceManager::default(),
            dashboard: DashboardManager::new(),
        }
    }

    /// The shared API client
    #[inline]
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Currently selected module
    #[inline]
    #[must_use]
    pub fn module(&self) -> Module {
        self.module
    }

    /// Switch modules
    pub fn set_module(&mut self, module: Module) {
        self.module = module;
    }

    /// Whether a session is stored
    pub fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.client.current_session()?.is_some())
    }

    /// Log in and load all collections
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Session, AppError> {
        let session = self.client.login(credentials).await?;
        self.refresh_all().await;
        Ok(session)
    }

    /// Log out; local session state is cleared even if the backend call fails
    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.client.logout().await?;
        Ok(())
    }

    /// Refresh every module, tolerating individual failures
    ///
    /// Each manager keeps its stale collection and raises its own banner on
    /// failure. The backend's dashboard payload stays authoritative here;
    /// [`Self::recompute_dashboard`] is for after local mutations.
    pub async fn refresh_all(&mut self) {
        let _ = self.dashboard.refresh(&self.client).await;
        let _ = self.meetings.refresh(&self.client).await;
        let _ = self.documents.refresh(&self.client).await;
        let _ = self.board.refresh(&self.client).await;
        let _ = self.compliance.refresh(&self.client).await;
    }

    /// Recompute dashboard counts from the local collections
    ///
    /// Called after a mutation so the aggregate counts reflect the refreshed
    /// collections without another round trip.
    pub fn recompute_dashboard(&mut self) {
        self.dashboard.recompute_local(
            &self.meetings,
            &self.documents,
            &self.board,
            &self.compliance,
            Utc::now(),
        );
    }
}
