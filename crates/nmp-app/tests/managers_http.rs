//! Manager tests against the stub backend

use chrono::{Duration, Utc};
use nmp_app::{ComplianceManager, DocumentManager, MeetingManager, NewDocument, NewMeeting};
use nmp_client::{ApiClient, ClientConfig, MemorySessionStore};
use nmp_domain::{DeadlineStatus, DocumentCategory, MeetingType, RecurringPattern};
use nmp_meeting::TemplateKind;
use nmp_test_utils::{fixtures, spawn_stub};
use std::sync::Arc;

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(
        ClientConfig::new().with_base_url(base_url),
        Arc::new(MemorySessionStore::new()),
    )
}

#[tokio::test]
async fn special_meeting_under_notice_never_reaches_the_network() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());
    let mut manager = MeetingManager::default();

    let now = Utc::now();
    let start = now + Duration::hours(24);
    let mut form = NewMeeting::new("Emergency Session", MeetingType::Special);
    form.scheduled_date = Some(start.date_naive());
    form.scheduled_time = Some(start.time());
    form.quorum_required = 4;

    let err = manager.create(&client, &form, now).await.unwrap_err();
    assert!(err.is_local());
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn created_document_appears_under_its_category_filter() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());
    let mut manager = DocumentManager::default();

    let form = NewDocument::new("Bylaws 2025", DocumentCategory::Legal, "bylaws.pdf");
    manager.create(&client, &form).await.unwrap();

    manager.set_category_filter(Some(DocumentCategory::Legal));
    let legal = manager.filtered();
    assert!(legal.iter().any(|d| d.title == "Bylaws 2025"));

    manager.set_category_filter(Some(DocumentCategory::Financial));
    assert!(manager.filtered().is_empty());
}

#[tokio::test]
async fn failed_refetch_keeps_the_stale_collection() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());
    stub.seed_meeting(
        serde_json::to_value(fixtures::meeting("Q3 Board Meeting", "2025-09-01", "18:00:00"))
            .unwrap(),
    );

    let mut manager = MeetingManager::default();
    manager.refresh(&client).await.unwrap();
    assert_eq!(manager.meetings().len(), 1);
    assert!(manager.error_banner().is_none());

    stub.force_server_error(true);
    assert!(manager.refresh(&client).await.is_err());
    assert_eq!(manager.meetings().len(), 1);
    assert!(manager.error_banner().unwrap().contains("server error"));

    stub.force_server_error(false);
    manager.refresh(&client).await.unwrap();
    assert!(manager.error_banner().is_none());
}

#[tokio::test]
async fn agenda_built_from_a_template_attaches_to_the_meeting() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());
    let meeting = fixtures::meeting("Q3 Board Meeting", "2025-09-01", "18:00:00");
    let id = meeting.id;
    stub.seed_meeting(serde_json::to_value(meeting).unwrap());

    let mut manager = MeetingManager::default();
    manager.refresh(&client).await.unwrap();

    let mut builder = manager.begin_agenda(id).unwrap();
    builder.load_template(TemplateKind::Regular);
    let agenda = builder.finish("Emily Rodriguez", Utc::now()).unwrap();
    manager.save_agenda(&client, id, agenda).await.unwrap();

    let saved = manager.meeting(id).unwrap();
    let agenda = saved.agenda.as_ref().unwrap();
    assert_eq!(agenda.items.len(), 7);
    assert_eq!(agenda.total_duration(), 120);

    // With an agenda in place the minutes recorder opens.
    assert!(manager.begin_minutes(id).is_ok());
    // And a second agenda wizard does not.
    assert!(manager.begin_agenda(id).is_err());
}

#[tokio::test]
async fn shell_login_loads_every_module() {
    use nmp_app::App;
    use nmp_domain::Credentials;

    let stub = spawn_stub();
    stub.seed_document(
        serde_json::to_value(fixtures::document(
            "Bylaws 2025",
            DocumentCategory::Legal,
            "bylaws.pdf",
        ))
        .unwrap(),
    );

    let mut app = App::new(client_for(&stub.base_url()));
    assert!(!app.is_authenticated().unwrap());

    app.login(&Credentials::new("david@example.org", "correct-horse"))
        .await
        .unwrap();
    assert!(app.is_authenticated().unwrap());

    // The backend dashboard payload is authoritative after a full refresh.
    assert_eq!(app.dashboard.data().stats.active_directors, 4);
    assert_eq!(app.dashboard.data().stats.compliance_percentage, 75);
    assert_eq!(app.documents.documents().len(), 1);

    app.logout().await.unwrap();
    assert!(!app.is_authenticated().unwrap());
}

#[tokio::test]
async fn completing_a_recurring_deadline_reports_the_next_cycle() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());
    let mut deadline = fixtures::deadline(
        "Quarterly Board Review",
        "2025-08-01".parse().unwrap(),
        DeadlineStatus::Pending,
    );
    deadline.recurring_pattern = RecurringPattern::Quarterly;
    let id = deadline.id;
    stub.seed_deadline(serde_json::to_value(deadline).unwrap());

    let mut manager = ComplianceManager::default();
    manager.refresh(&client).await.unwrap();

    let next_due = manager.complete(&client, id, "Sarah Johnson").await.unwrap();
    assert_eq!(next_due, Some("2025-11-01".parse().unwrap()));

    let refreshed = manager
        .deadlines()
        .iter()
        .find(|d| d.id == id)
        .unwrap();
    assert_eq!(refreshed.status, DeadlineStatus::Completed);

    let today = "2025-08-06".parse().unwrap();
    assert_eq!(manager.metrics(today).completed, 1);
    assert_eq!(manager.metrics(today).overdue, 0);
}
