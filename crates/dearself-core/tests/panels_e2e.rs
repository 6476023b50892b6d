//! E2E tests for the feature panels against a mock data API.
//!
//! These exercise the caller-side contracts the store does not enforce:
//! singleton-per-day upserts for steps/mood, validation before any write,
//! and today-total aggregation for hydration.

use chrono::{Duration, Utc};
use dearself_core::{
    CoreError, DashboardPanel, HydrationPanel, JournalPanel, Mood, MoodPanel, Session, StepsPanel,
    StoreClient, TasksPanel, ValidationError,
};
use mockito::Matcher;
use serde_json::json;
use url::Url;
use uuid::Uuid;

const USER_ID: &str = "7f9c24e5-1d9f-4b0a-8f63-9a4f5be0c1de";

fn test_session() -> Session {
    Session {
        user_id: Uuid::parse_str(USER_ID).unwrap(),
        email: "me@example.com".into(),
        access_token: "test-jwt".into(),
        refresh_token: None,
        expires_at: None,
    }
}

fn client_for(server: &mockito::ServerGuard) -> StoreClient {
    StoreClient::new(Url::parse(&server.url()).unwrap(), "anon-key".into())
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn week_ago() -> String {
    (Utc::now().date_naive() - Duration::days(7)).to_string()
}

fn hydration_row(amount_ml: i64) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "created_at": "2025-08-29T08:00:00Z",
        "amount_ml": amount_ml,
        "date": today(),
        "user_id": USER_ID
    })
}

fn steps_row(id: Uuid, steps: i64) -> serde_json::Value {
    json!({
        "id": id,
        "created_at": "2025-08-29T08:00:00Z",
        "steps": steps,
        "date": today(),
        "user_id": USER_ID
    })
}

#[tokio::test]
async fn hydration_today_total_sums_all_rows() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();

    server
        .mock("GET", "/rest/v1/hydration_logs")
        .match_query(Matcher::UrlEncoded("date".into(), format!("eq.{}", today())))
        .with_status(200)
        .with_body(json!([hydration_row(500), hydration_row(250), hydration_row(250)]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/hydration_logs")
        .match_query(Matcher::UrlEncoded("date".into(), format!("gte.{}", week_ago())))
        .with_status(200)
        .with_body(json!([hydration_row(500), hydration_row(250), hydration_row(250)]).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = HydrationPanel::new(&client, &session, 2000);
    panel.load().await.unwrap();

    assert_eq!(panel.today_total_ml(), 1000);
    assert_eq!(panel.goal_progress_pct(), 50.0);
    let weekly = panel.weekly_totals();
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].1, 1000);
}

#[tokio::test]
async fn hydration_rejects_non_positive_amount_without_request() {
    // Nothing is mocked: a validation failure must never reach the store.
    let server = mockito::Server::new_async().await;
    let session = test_session();
    let client = client_for(&server);
    let mut panel = HydrationPanel::new(&client, &session, 2000);

    let err = panel.log_amount(0).await.unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::NonPositiveAmount { .. })
    ));
    assert_eq!(panel.today_total_ml(), 0);
}

#[tokio::test]
async fn steps_inserts_when_no_row_exists_today() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();

    server
        .mock("GET", "/rest/v1/steps_logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let insert = server
        .mock("POST", "/rest/v1/steps_logs")
        .match_body(Matcher::PartialJson(json!([{ "steps": 8000, "user_id": USER_ID }])))
        .with_status(201)
        .with_body(json!([steps_row(Uuid::new_v4(), 8000)]).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = StepsPanel::new(&client, &session, 10_000);
    panel.load().await.unwrap();
    assert!(panel.today_log().is_none());

    panel.log_steps(8000).await.unwrap();
    insert.assert_async().await;
}

#[tokio::test]
async fn steps_updates_existing_row_instead_of_inserting() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();
    let row_id = Uuid::new_v4();

    server
        .mock("GET", "/rest/v1/steps_logs")
        .match_query(Matcher::UrlEncoded("date".into(), format!("eq.{}", today())))
        .with_status(200)
        .with_body(json!([steps_row(row_id, 4000)]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/steps_logs")
        .match_query(Matcher::UrlEncoded("date".into(), format!("gte.{}", week_ago())))
        .with_status(200)
        .with_body(json!([steps_row(row_id, 4000)]).to_string())
        .create_async()
        .await;
    let update = server
        .mock("PATCH", "/rest/v1/steps_logs")
        .match_query(Matcher::UrlEncoded("id".into(), format!("eq.{row_id}")))
        .match_body(Matcher::Json(json!({ "steps": 9500 })))
        .with_status(204)
        .create_async()
        .await;
    let insert = server
        .mock("POST", "/rest/v1/steps_logs")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = StepsPanel::new(&client, &session, 10_000);
    panel.load().await.unwrap();
    assert_eq!(panel.today_steps(), 4000);

    panel.log_steps(9500).await.unwrap();
    update.assert_async().await;
    insert.assert_async().await;
}

#[tokio::test]
async fn steps_rejects_negative_count() {
    let server = mockito::Server::new_async().await;
    let session = test_session();
    let client = client_for(&server);
    let mut panel = StepsPanel::new(&client, &session, 10_000);

    let err = panel.log_steps(-1).await.unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::NegativeAmount { .. })
    ));
}

#[tokio::test]
async fn mood_upsert_validates_intensity_range() {
    let server = mockito::Server::new_async().await;
    let session = test_session();
    let client = client_for(&server);
    let mut panel = MoodPanel::new(&client, &session);

    for bad in [0, 11, -3] {
        let err = panel.log_mood(Mood::Calm, bad, None).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }
}

#[tokio::test]
async fn mood_updates_todays_existing_row() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();
    let row_id = Uuid::new_v4();
    let mood_row = json!({
        "id": row_id,
        "created_at": "2025-08-29T08:00:00Z",
        "mood": "anxious",
        "intensity": 7,
        "notes": null,
        "date": today(),
        "user_id": USER_ID
    });

    server
        .mock("GET", "/rest/v1/mood_logs")
        .match_query(Matcher::UrlEncoded("date".into(), format!("eq.{}", today())))
        .with_status(200)
        .with_body(json!([mood_row]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/mood_logs")
        .match_query(Matcher::UrlEncoded("date".into(), format!("gte.{}", week_ago())))
        .with_status(200)
        .with_body(json!([mood_row]).to_string())
        .create_async()
        .await;
    let update = server
        .mock("PATCH", "/rest/v1/mood_logs")
        .match_query(Matcher::UrlEncoded("id".into(), format!("eq.{row_id}")))
        .match_body(Matcher::PartialJson(json!({ "mood": "calm", "intensity": 4 })))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = MoodPanel::new(&client, &session);
    panel.load().await.unwrap();
    assert_eq!(panel.today_log().unwrap().mood, Mood::Anxious);

    panel.log_mood(Mood::Calm, 4, Some("  ")).await.unwrap();
    update.assert_async().await;
}

#[tokio::test]
async fn tasks_add_rejects_blank_title_without_request() {
    let server = mockito::Server::new_async().await;
    let session = test_session();
    let client = client_for(&server);
    let mut panel = TasksPanel::new(&client, &session);

    let err = panel
        .add("   ", None, dearself_core::Priority::Medium)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::EmptyField { .. })
    ));
    assert!(panel.tasks().is_empty());
}

#[tokio::test]
async fn journal_add_requires_title_and_content() {
    let server = mockito::Server::new_async().await;
    let session = test_session();
    let client = client_for(&server);
    let mut panel = JournalPanel::new(&client, &session);

    assert!(panel.add("", "body", Mood::Neutral, None).await.is_err());
    assert!(panel.add("title", " ", Mood::Neutral, None).await.is_err());
}

#[tokio::test]
async fn journal_filter_matches_title_content_and_mood() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();

    let entries = json!([
        {
            "id": Uuid::new_v4(),
            "created_at": "2025-08-28T20:00:00Z",
            "title": "Gratitude list",
            "content": "Sunny walk in the park",
            "mood": "happy",
            "date": "2025-08-28",
            "user_id": USER_ID
        },
        {
            "id": Uuid::new_v4(),
            "created_at": "2025-08-27T21:00:00Z",
            "title": "Rough day",
            "content": "Deadline stress",
            "mood": "anxious",
            "date": "2025-08-27",
            "user_id": USER_ID
        }
    ]);
    server
        .mock("GET", "/rest/v1/journal_entries")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(entries.to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = JournalPanel::new(&client, &session);
    panel.load().await.unwrap();

    assert_eq!(panel.filtered("walk", None).len(), 1);
    assert_eq!(panel.filtered("", Some(Mood::Anxious)).len(), 1);
    assert_eq!(panel.filtered("deadline", Some(Mood::Happy)).len(), 0);
    assert_eq!(panel.filtered("", None).len(), 2);
}

#[tokio::test]
async fn dashboard_aggregates_across_domains() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();

    server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!([
                { "id": Uuid::new_v4(), "created_at": "2025-08-29T08:00:00Z", "title": "a",
                  "description": null, "completed": true, "priority": "low", "user_id": USER_ID },
                { "id": Uuid::new_v4(), "created_at": "2025-08-29T08:00:00Z", "title": "b",
                  "description": null, "completed": false, "priority": "high", "user_id": USER_ID }
            ])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/hydration_logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!([hydration_row(750), hydration_row(500)]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/steps_logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!([steps_row(Uuid::new_v4(), 6200)]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/journal_entries")
        .match_query(Matcher::Any)
        .match_header("prefer", "count=exact")
        .with_status(206)
        .with_header("content-range", "0-0/12")
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/mood_logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!([{
                "id": Uuid::new_v4(),
                "created_at": "2025-08-29T07:00:00Z",
                "mood": "excited",
                "intensity": 8,
                "notes": "morning run",
                "date": today(),
                "user_id": USER_ID
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = DashboardPanel::new(&client, &session);
    panel.load().await.unwrap();

    let summary = panel.summary();
    assert_eq!(summary.tasks_total, 2);
    assert_eq!(summary.tasks_completed, 1);
    assert_eq!(summary.hydration_ml_today, 1250);
    assert_eq!(summary.steps_today, 6200);
    assert_eq!(summary.journal_entries, 12);
    assert_eq!(summary.latest_mood.as_ref().unwrap().mood, Mood::Excited);
}

#[tokio::test]
async fn load_failure_leaves_previous_state_untouched() {
    let mut server = mockito::Server::new_async().await;
    let session = test_session();

    let ok = server
        .mock("GET", "/rest/v1/hydration_logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!([hydration_row(500)]).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut panel = HydrationPanel::new(&client, &session, 2000);
    panel.load().await.unwrap();
    assert_eq!(panel.today_total_ml(), 500);
    ok.assert_async().await;

    // Flip the store to failing; the panel must keep its last-known rows.
    server.reset();
    server
        .mock("GET", "/rest/v1/hydration_logs")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(json!({ "message": "boom" }).to_string())
        .create_async()
        .await;

    assert!(panel.load().await.is_err());
    assert_eq!(panel.today_total_ml(), 500);
}
