//! Typed endpoint surface
//!
//! One method per backend route. Creation payloads are generic over
//! `Serialize` so callers can post partial records (the backend assigns ids).
//! Delete routes are part of the backend surface; no view calls them yet.

use crate::client::ApiClient;
use crate::error::ApiError;
use nmp_domain::{
    ActivityEntry, AreaId, AuditEntry, BoardMember, Committee, CommitteeId, ComplianceArea,
    ComplianceDeadline, DashboardData, DeadlineId, Document, DocumentId, Meeting, MeetingId,
    MemberId, SearchRequest, SearchResponse, User, UserId,
};
use serde::Serialize;
use serde_json::Value;

impl ApiClient {
    /// `GET /dashboard`
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get("/dashboard").await
    }

    // --- Meetings ---

    /// `GET /meetings`
    pub async fn meetings(&self, query: &[(&str, &str)]) -> Result<Vec<Meeting>, ApiError> {
        self.get_with_query("/meetings", query).await
    }

    /// `GET /meetings/{id}`
    pub async fn meeting(&self, id: MeetingId) -> Result<Meeting, ApiError> {
        self.get(&format!("/meetings/{id}")).await
    }

    /// `POST /meetings`
    pub async fn create_meeting<B: Serialize + ?Sized>(
        &self,
        meeting: &B,
    ) -> Result<Meeting, ApiError> {
        self.post("/meetings", meeting).await
    }

    /// `PUT /meetings/{id}`
    pub async fn update_meeting(&self, id: MeetingId, meeting: &Meeting) -> Result<Meeting, ApiError> {
        self.put(&format!("/meetings/{id}"), meeting).await
    }

    /// `DELETE /meetings/{id}`
    pub async fn delete_meeting(&self, id: MeetingId) -> Result<(), ApiError> {
        self.delete(&format!("/meetings/{id}")).await
    }

    // --- Documents ---

    /// `GET /documents`
    pub async fn documents(&self, query: &[(&str, &str)]) -> Result<Vec<Document>, ApiError> {
        self.get_with_query("/documents", query).await
    }

    /// `GET /documents/{id}`
    pub async fn document(&self, id: DocumentId) -> Result<Document, ApiError> {
        self.get(&format!("/documents/{id}")).await
    }

    /// `POST /documents`
    pub async fn create_document<B: Serialize + ?Sized>(
        &self,
        document: &B,
    ) -> Result<Document, ApiError> {
        self.post("/documents", document).await
    }

    /// `PUT /documents/{id}`
    pub async fn update_document(
        &self,
        id: DocumentId,
        document: &Document,
    ) -> Result<Document, ApiError> {
        self.put(&format!("/documents/{id}"), document).await
    }

    /// `DELETE /documents/{id}`
    pub async fn delete_document(&self, id: DocumentId) -> Result<(), ApiError> {
        self.delete(&format!("/documents/{id}")).await
    }

    // --- Board ---

    /// `GET /board`
    pub async fn board_members(&self, query: &[(&str, &str)]) -> Result<Vec<BoardMember>, ApiError> {
        self.get_with_query("/board", query).await
    }

    /// `GET /board/{id}`
    pub async fn board_member(&self, id: MemberId) -> Result<BoardMember, ApiError> {
        self.get(&format!("/board/{id}")).await
    }

    /// `POST /board`
    pub async fn add_board_member<B: Serialize + ?Sized>(
        &self,
        member: &B,
    ) -> Result<BoardMember, ApiError> {
        self.post("/board", member).await
    }

    /// `PUT /board/{id}`
    pub async fn update_board_member(
        &self,
        id: MemberId,
        member: &BoardMember,
    ) -> Result<BoardMember, ApiError> {
        self.put(&format!("/board/{id}"), member).await
    }

    /// `DELETE /board/{id}`
    pub async fn delete_board_member(&self, id: MemberId) -> Result<(), ApiError> {
        self.delete(&format!("/board/{id}")).await
    }

    // --- Committees ---

    /// `GET /board/committees`
    pub async fn committees(&self) -> Result<Vec<Committee>, ApiError> {
        self.get("/board/committees").await
    }

    /// `GET /board/committees/{id}`
    pub async fn committee(&self, id: CommitteeId) -> Result<Committee, ApiError> {
        self.get(&format!("/board/committees/{id}")).await
    }

    /// `POST /board/committees`
    pub async fn create_committee<B: Serialize + ?Sized>(
        &self,
        committee: &B,
    ) -> Result<Committee, ApiError> {
        self.post("/board/committees", committee).await
    }

    /// `PUT /board/committees/{id}`
    pub async fn update_committee(
        &self,
        id: CommitteeId,
        committee: &Committee,
    ) -> Result<Committee, ApiError> {
        self.put(&format!("/board/committees/{id}"), committee).await
    }

    /// `DELETE /board/committees/{id}`
    pub async fn delete_committee(&self, id: CommitteeId) -> Result<(), ApiError> {
        self.delete(&format!("/board/committees/{id}")).await
    }

    // --- Compliance ---

    /// `GET /compliance`
    pub async fn compliance_status(&self) -> Result<Value, ApiError> {
        self.get("/compliance").await
    }

    /// `GET /compliance/deadlines`
    pub async fn deadlines(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Vec<ComplianceDeadline>, ApiError> {
        self.get_with_query("/compliance/deadlines", query).await
    }

    /// `GET /compliance/deadlines/{id}`
    pub async fn deadline(&self, id: DeadlineId) -> Result<ComplianceDeadline, ApiError> {
        self.get(&format!("/compliance/deadlines/{id}")).await
    }

    /// `POST /compliance/deadlines`
    pub async fn create_deadline<B: Serialize + ?Sized>(
        &self,
        deadline: &B,
    ) -> Result<ComplianceDeadline, ApiError> {
        self.post("/compliance/deadlines", deadline).await
    }

    /// `PUT /compliance/deadlines/{id}`
    pub async fn update_deadline(
        &self,
        id: DeadlineId,
        deadline: &ComplianceDeadline,
    ) -> Result<ComplianceDeadline, ApiError> {
        self.put(&format!("/compliance/deadlines/{id}"), deadline).await
    }

    /// `DELETE /compliance/deadlines/{id}`
    pub async fn delete_deadline(&self, id: DeadlineId) -> Result<(), ApiError> {
        self.delete(&format!("/compliance/deadlines/{id}")).await
    }

    /// `POST /compliance/deadlines/{id}/complete`
    pub async fn complete_deadline<B: Serialize + ?Sized>(
        &self,
        id: DeadlineId,
        completion: &B,
    ) -> Result<ComplianceDeadline, ApiError> {
        self.post(&format!("/compliance/deadlines/{id}/complete"), completion)
            .await
    }

    /// `GET /compliance/areas`
    pub async fn compliance_areas(&self) -> Result<Vec<ComplianceArea>, ApiError> {
        self.get("/compliance/areas").await
    }

    /// `GET /compliance/areas/{id}`
    pub async fn compliance_area(&self, id: AreaId) -> Result<ComplianceArea, ApiError> {
        self.get(&format!("/compliance/areas/{id}")).await
    }

    /// `PUT /compliance/areas/{id}`
    pub async fn update_compliance_area(
        &self,
        id: AreaId,
        area: &ComplianceArea,
    ) -> Result<ComplianceArea, ApiError> {
        self.put(&format!("/compliance/areas/{id}"), area).await
    }

    /// `GET /compliance/audit`
    pub async fn audit_trail(&self, query: &[(&str, &str)]) -> Result<Vec<AuditEntry>, ApiError> {
        self.get_with_query("/compliance/audit", query).await
    }

    /// `POST /compliance/audit`
    pub async fn create_audit_entry<B: Serialize + ?Sized>(
        &self,
        entry: &B,
    ) -> Result<AuditEntry, ApiError> {
        self.post("/compliance/audit", entry).await
    }

    // --- Users ---

    /// `GET /users`
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// `GET /users/{id}`
    pub async fn user(&self, id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/users/{id}")).await
    }

    /// `PUT /users/{id}`
    pub async fn update_user(&self, id: UserId, user: &User) -> Result<User, ApiError> {
        self.put(&format!("/users/{id}"), user).await
    }

    // --- Misc ---

    /// `GET /activity`
    pub async fn activity(&self, query: &[(&str, &str)]) -> Result<Vec<ActivityEntry>, ApiError> {
        self.get_with_query("/activity", query).await
    }

    /// `POST /search`
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.post("/search", request).await
    }
}
