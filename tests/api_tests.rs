//! API integration tests
//!
//! Each test drives the full router in process against a throwaway data
//! directory, so every assertion covers routing, handlers, services and
//! the snapshot store together.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use wayfarer_server::{
    config::AppConfig,
    repository::{Repository, SnapshotStore},
    services::Services,
    AppState,
};

fn test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = AppConfig {
        server: Default::default(),
        storage: wayfarer_server::config::StorageConfig {
            data_dir: temp_dir.path().to_string_lossy().into_owned(),
        },
        logging: Default::default(),
        generation: Default::default(),
        weather: Default::default(),
        currency: Default::default(),
    };
    let repository = Repository::new(SnapshotStore::new(temp_dir.path()));
    let services = Services::new(repository, &config).expect("services");
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };
    (wayfarer_server::create_router(state), temp_dir)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

async fn create_trip(app: &Router, name: &str, start: &str, days: u32) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/trips",
        Some(json!({
            "name": name,
            "startDate": start,
            "durationDays": days,
            "season": "winter"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (app, _dir) = test_app();
    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_trip_seeds_placeholder_days() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Kansai winter", "2026-01-23", 3).await;
    assert_eq!(trip["name"], "Kansai winter");

    let uri = format!("/api/v1/trips/{}/days", trip["id"].as_str().unwrap());
    let (status, days) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let days = days.as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["label"], "Day 1");
    assert_eq!(days[0]["date"], "2026-01-23");
    assert_eq!(days[0]["weekday"], "Fri");
    assert_eq!(days[2]["label"], "Day 3");
    assert_eq!(days[2]["date"], "2026-01-25");
    assert_eq!(days[2]["weekday"], "Sun");
    // Winter placeholder weather.
    assert_eq!(days[0]["weather"]["icon"], "snow");
}

#[tokio::test]
async fn unknown_trip_is_404_with_code() {
    let (app, _dir) = test_app();
    let (status, body) = send(
        &app,
        "GET",
        "/api/v1/trips/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4);
}

#[tokio::test]
async fn append_and_delete_days_renumber_the_sequence() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, appended) =
        send(&app, "POST", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appended["label"], "Day 3");
    assert_eq!(appended["date"], "2026-01-25");

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let middle_id = days[1]["id"].as_str().unwrap().to_string();

    let (status, remaining) = send(
        &app,
        "DELETE",
        &format!("/api/v1/trips/{trip_id}/days/{middle_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 2);
    // The day after the removed one slid into its slot and was renumbered.
    assert_eq!(remaining[1]["label"], "Day 2");
    assert_eq!(remaining[1]["date"], "2026-01-24");
}

#[tokio::test]
async fn last_day_cannot_be_deleted() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 1).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let day_id = days[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/v1/trips/{trip_id}/days/{day_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7);

    // Sequence unchanged.
    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    assert_eq!(days.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn reorder_moves_identity_and_renumbers() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 3).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let first = days[0]["id"].as_str().unwrap().to_string();
    let third = days[2]["id"].as_str().unwrap().to_string();

    // Move day 3 to the front.
    let (status, reordered) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/days/reorder"),
        Some(json!({ "movedId": third, "targetId": first })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let reordered = reordered.as_array().unwrap();
    assert_eq!(reordered[0]["id"], third.as_str());
    assert_eq!(reordered[1]["id"], first.as_str());
    // Derived fields follow position, not identity.
    assert_eq!(reordered[0]["label"], "Day 1");
    assert_eq!(reordered[0]["date"], "2026-01-23");
    assert_eq!(reordered[2]["label"], "Day 3");
}

#[tokio::test]
async fn identity_merge_updates_content_and_counts_unmatched() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let day_id = days[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days"),
        Some(json!({
            "days": [
                {
                    "id": day_id,
                    "title": "Arrival in Osaka",
                    "location": "Osaka",
                    "events": [
                        { "time": "14:00", "title": "Check in", "category": "hotel" },
                        { "time": "09:30", "title": "Land at KIX", "category": "flight" }
                    ]
                },
                {
                    "id": "11111111-1111-1111-1111-111111111111",
                    "title": "Ghost day",
                    "location": "Nowhere"
                }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched"], 1);
    assert_eq!(body["ignored"], 1);

    let updated = &body["days"][0];
    assert_eq!(updated["id"], day_id.as_str());
    assert_eq!(updated["title"], "Arrival in Osaka");
    // Derived fields survive the merge untouched.
    assert_eq!(updated["label"], "Day 1");
    assert_eq!(updated["date"], "2026-01-23");
    // Events come back sorted by time of day.
    assert_eq!(updated["events"][0]["time"], "09:30");
    assert_eq!(updated["events"][1]["time"], "14:00");
}

#[tokio::test]
async fn bad_event_time_is_rejected() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 1).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let day_id = days[0]["id"].as_str().unwrap().to_string();

    for bad_time in ["2pm", "9:30", "99:99", "14:60"] {
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/trips/{trip_id}/days"),
            Some(json!({
                "days": [{
                    "id": day_id,
                    "title": "Bad",
                    "location": "Osaka",
                    "events": [{ "time": bad_time, "title": "Nope", "category": "food" }]
                }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "time {bad_time:?}");
        assert_eq!(body["code"], 18);
    }

    // Zero-padded morning times sort before afternoon ones.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days"),
        Some(json!({
            "days": [{
                "id": day_id,
                "title": "Good",
                "location": "Osaka",
                "events": [
                    { "time": "14:00", "title": "Afternoon", "category": "activity" },
                    { "time": "09:30", "title": "Morning", "category": "food" }
                ]
            }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"][0]["events"][0]["title"], "Morning");
    assert_eq!(body["days"][0]["events"][1]["title"], "Afternoon");
}

#[tokio::test]
async fn label_merge_with_unmatched_labels_is_rejected() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days?key=label"),
        Some(json!({
            "days": [
                { "label": "Day 1", "title": "Planned", "location": "Kyoto" },
                { "label": "Day 9", "title": "Orphan", "location": "Nara" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 21);

    // Nothing was applied.
    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    assert_eq!(days[0]["title"], "Open day");
}

#[tokio::test]
async fn label_merge_applies_when_every_label_matches() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, before) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let original_id = before[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days?key=label"),
        Some(json!({
            "days": [{ "label": "Day 1", "title": "Temples", "location": "Kyoto" }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched"], 1);
    // Matching by label still preserves the stable identity.
    assert_eq!(body["days"][0]["id"], original_id.as_str());
    assert_eq!(body["days"][0]["title"], "Temples");
}

#[tokio::test]
async fn pass_covers_consecutive_days_and_clamps() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 3).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let second = days[1]["id"].as_str().unwrap().to_string();

    // A 7-day pass starting on day 2 of a 3-day trip covers days 2 and 3.
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days/{second}/pass"),
        Some(json!({ "name": "JR Pass", "durationDays": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated[0]["passName"].is_null());
    assert_eq!(updated[1]["passName"], "JR Pass");
    assert_eq!(updated[2]["passName"], "JR Pass");

    let (status, cleared) = send(
        &app,
        "DELETE",
        &format!("/api/v1/trips/{trip_id}/days/{second}/pass?duration_days=7"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared[1]["passName"].is_null());
    assert!(cleared[2]["passName"].is_null());
}

#[tokio::test]
async fn changing_start_date_recomputes_every_day() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}"),
        Some(json!({ "startDate": "2026-04-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    assert_eq!(days[0]["date"], "2026-04-01");
    assert_eq!(days[1]["date"], "2026-04-02");
    assert_eq!(days[0]["weekday"], "Wed");
}

#[tokio::test]
async fn reset_keeps_length_but_replaces_content() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 3).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let day_id = days[0]["id"].as_str().unwrap().to_string();
    send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days"),
        Some(json!({ "days": [{ "id": day_id, "title": "Edited", "location": "Kobe" }] })),
    )
    .await;

    let (status, reset) =
        send(&app, "POST", &format!("/api/v1/trips/{trip_id}/reset"), None).await;
    assert_eq!(status, StatusCode::OK);
    let reset = reset.as_array().unwrap();
    assert_eq!(reset.len(), 3);
    assert_eq!(reset[0]["title"], "Open day");
    // Fresh identities after a reset.
    assert_ne!(reset[0]["id"], day_id.as_str());
}

#[tokio::test]
async fn duplicate_copies_days_with_fresh_identities() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Original", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, copy) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/duplicate"),
        Some(json!({ "name": "Second run", "startDate": "2026-11-05" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(copy["name"], "Second run");
    assert_eq!(copy["season"], "winter");

    let copy_id = copy["id"].as_str().unwrap();
    let (_, original_days) =
        send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let (_, copied_days) =
        send(&app, "GET", &format!("/api/v1/trips/{copy_id}/days"), None).await;
    assert_eq!(copied_days.as_array().unwrap().len(), 2);
    assert_ne!(copied_days[0]["id"], original_days[0]["id"]);
    assert_eq!(copied_days[0]["date"], "2026-11-05");
}

#[tokio::test]
async fn expenses_flow_with_summary() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 1).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, ramen) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/expenses"),
        Some(json!({ "title": "Ramen", "amount": "1200", "category": "food" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/expenses"),
        Some(json!({ "title": "Shinkansen", "amount": "13870", "category": "transport" })),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/expenses"),
        Some(json!({ "title": "Refund?", "amount": "-5", "category": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 18);

    let (_, summary) = send(
        &app,
        "GET",
        &format!("/api/v1/trips/{trip_id}/expenses/summary"),
        None,
    )
    .await;
    assert_eq!(summary["total"], "15070");
    let by_category = summary["byCategory"].as_array().unwrap();
    assert_eq!(by_category.len(), 2);

    let ramen_id = ramen["id"].as_str().unwrap();
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/trips/{trip_id}/expenses/{ramen_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) =
        send(&app, "GET", &format!("/api/v1/trips/{trip_id}/expenses"), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn checklist_is_seeded_and_editable() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Trip", "2026-01-23", 1).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, checklist) =
        send(&app, "GET", &format!("/api/v1/trips/{trip_id}/checklist"), None).await;
    assert_eq!(status, StatusCode::OK);
    let categories = checklist.as_array().unwrap();
    assert!(categories.iter().any(|c| c["title"] == "Documents"));

    let (status, category) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/checklist/categories"),
        Some(json!({ "title": "Snacks" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = category["id"].as_str().unwrap();

    let (status, item) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/checklist/categories/{category_id}/items"),
        Some(json!({ "text": "Onigiri" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["checked"], false);
    let item_id = item["id"].as_str().unwrap();

    let (status, toggled) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/checklist/items/{item_id}/toggle"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["checked"], true);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/trips/{trip_id}/checklist/categories/{category_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn export_and_import_round_trip() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Source", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    // Leave a mark to verify it travels with the export.
    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    let day_id = days[0]["id"].as_str().unwrap().to_string();
    send(
        &app,
        "PUT",
        &format!("/api/v1/trips/{trip_id}/days"),
        Some(json!({ "days": [{ "id": day_id, "title": "Fushimi Inari", "location": "Kyoto" }] })),
    )
    .await;

    let (status, export) =
        send(&app, "GET", &format!("/api/v1/trips/{trip_id}/export"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(export["tripSettings"].is_object());
    assert_eq!(export["itineraryData"].as_array().unwrap().len(), 2);

    let target = create_trip(&app, "Target", "2026-06-01", 1).await;
    let target_id = target["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{target_id}/import"),
        Some(export),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, imported) = send(&app, "GET", &format!("/api/v1/trips/{target_id}"), None).await;
    // Target keeps its identity; settings come from the document.
    assert_eq!(imported["id"], target_id);
    assert_eq!(imported["name"], "Source");

    let (_, imported_days) =
        send(&app, "GET", &format!("/api/v1/trips/{target_id}/days"), None).await;
    assert_eq!(imported_days.as_array().unwrap().len(), 2);
    assert_eq!(imported_days[0]["title"], "Fushimi Inari");
}

#[tokio::test]
async fn malformed_import_leaves_trip_untouched() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Keeper", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{trip_id}/import"),
        Some(json!({ "expenses": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 19);

    let (_, kept) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}"), None).await;
    assert_eq!(kept["name"], "Keeper");
    let (_, days) = send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    assert_eq!(days.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn share_code_round_trip_through_api() {
    let (app, _dir) = test_app();
    let trip = create_trip(&app, "Coded", "2026-01-23", 2).await;
    let trip_id = trip["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/trips/{trip_id}/export/code"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let code = body["code"].as_str().unwrap().to_string();
    assert!(code.starts_with("WF2."));

    let target = create_trip(&app, "Target", "2026-06-01", 1).await;
    let target_id = target["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{target_id}/import/code"),
        Some(json!({ "code": code })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, imported) = send(&app, "GET", &format!("/api/v1/trips/{target_id}"), None).await;
    assert_eq!(imported["name"], "Coded");

    // A corrupted code is refused.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/trips/{target_id}/import/code"),
        Some(json!({ "code": "WF2.deadbeef.AAAA" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 19);
}

#[tokio::test]
async fn preferences_persist() {
    let (app, _dir) = test_app();

    let (status, prefs) = send(&app, "GET", "/api/v1/preferences", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prefs["darkMode"], false);

    let (status, updated) = send(
        &app,
        "PUT",
        "/api/v1/preferences",
        Some(json!({ "darkMode": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["darkMode"], true);

    let (_, reread) = send(&app, "GET", "/api/v1/preferences", None).await;
    assert_eq!(reread["darkMode"], true);
}

#[tokio::test]
async fn deleting_a_trip_removes_its_collections() {
    let (app, dir) = test_app();
    let trip = create_trip(&app, "Gone", "2026-01-23", 1).await;
    let trip_id = trip["id"].as_str().unwrap();

    let files_before = std::fs::read_dir(dir.path()).unwrap().count();
    assert!(files_before >= 4);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        send(&app, "GET", &format!("/api/v1/trips/{trip_id}/days"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Only the (now empty) trips index remains.
    let remaining: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(remaining.iter().all(|name| !name.contains("itinerary_")));
    assert!(remaining.iter().all(|name| !name.contains("expenses_")));
    assert!(remaining.iter().all(|name| !name.contains("checklist_")));
}
