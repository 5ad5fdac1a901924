use std::sync::Arc;

use academico_core::{
    errors::ScheduleError,
    models::{ScopeKey, Slot, SlotFilter, Weekday},
};
use academico_db::{memory::MemorySlotStore, mock::repositories::MockSlotStore};
use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, slot_body, stored_slot};

fn order(slots: &[Slot]) -> Vec<String> {
    slots
        .iter()
        .map(|s| format!("{} {}", s.weekday, s.start_time))
        .collect()
}

#[tokio::test]
async fn test_create_slot_success() {
    let ctx = TestContext::new();
    let math = Uuid::new_v4();

    let mut body = slot_body(math, "segunda-feira", "08:00", "09:30");
    body["room"] = json!("Room 101");
    let slot = ctx.create(body).await;

    assert_eq!(slot.subject_id, math);
    assert_eq!(slot.weekday, Weekday::Monday);
    assert_eq!(slot.start_time.to_string(), "08:00");
    assert_eq!(slot.room.as_deref(), Some("Room 101"));
}

#[test_log::test(tokio::test)]
async fn test_create_overlapping_slot_conflicts() {
    let ctx = TestContext::new();
    let math = Uuid::new_v4();
    let existing = ctx.create(slot_body(math, "monday", "08:00", "09:30")).await;

    let response = ctx
        .server
        .post("/api/slots")
        .json(&slot_body(math, "monday", "09:00", "10:00"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["conflict"]["id"], json!(existing.id));
    assert_eq!(body["conflict"]["start_time"], "08:00");
    assert_eq!(body["conflict"]["end_time"], "09:30");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("conflicts with existing session 08:00-09:30")
    );

    let listed = ctx.server.get("/api/slots").await.json::<Vec<Slot>>();
    assert_eq!(listed, vec![existing]);
}

#[tokio::test]
async fn test_back_to_back_and_other_scopes_are_accepted() {
    let ctx = TestContext::new();
    let math = Uuid::new_v4();
    let physics = Uuid::new_v4();

    ctx.create(slot_body(math, "monday", "09:00", "10:00")).await;
    ctx.create(slot_body(math, "monday", "10:00", "11:00")).await;
    ctx.create(slot_body(math, "tuesday", "09:30", "10:30")).await;
    ctx.create(slot_body(physics, "monday", "09:00", "10:00")).await;

    let listed = ctx.server.get("/api/slots").await.json::<Vec<Slot>>();
    assert_eq!(listed.len(), 4);
}

#[tokio::test]
async fn test_long_section_and_room_are_accepted() {
    let ctx = TestContext::with_store(Arc::new(MemorySlotStore::new()), ScopeKey::Section);
    let section = "Engenharia de Computação, turma noturna 2026/2".repeat(3);
    let room = "Bloco C, Laboratório de Redes ".repeat(10);

    let mut body = slot_body(Uuid::new_v4(), "wednesday", "19:00", "20:40");
    body["section"] = json!(section);
    body["room"] = json!(room);
    let slot = ctx.create(body).await;

    assert!(section.chars().count() > 64);
    assert_eq!(slot.section.as_deref(), Some(section.as_str()));
    assert_eq!(slot.room.as_deref(), Some(room.trim()));
}

#[rstest]
#[case("10:00", "10:00")]
#[case("11:00", "09:00")]
#[tokio::test]
async fn test_invalid_range_is_bad_request(#[case] start: &str, #[case] end: &str) {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&slot_body(Uuid::new_v4(), "monday", start, end))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["field"], "end_time");
}

#[rstest]
#[case(slot_body(Uuid::new_v4(), "domingo", "08:00", "09:00"))]
#[case(slot_body(Uuid::new_v4(), "monday", "8 o'clock", "09:00"))]
#[case(slot_body(Uuid::new_v4(), "monday", "8:5", "09:00"))]
#[case(json!({ "weekday": "monday", "start_time": "08:00", "end_time": "09:00" }))]
#[tokio::test]
async fn test_malformed_body_is_bad_request(#[case] body: Value) {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/slots").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_list_is_ordered_by_weekday_then_time() {
    let ctx = TestContext::new();
    let subject = Uuid::new_v4();

    ctx.create(slot_body(subject, "wednesday", "08:00", "09:00")).await;
    ctx.create(slot_body(subject, "monday", "14:00", "15:00")).await;
    ctx.create(slot_body(subject, "monday", "09:00", "10:00")).await;

    let listed = ctx.server.get("/api/slots").await.json::<Vec<Slot>>();

    assert_eq!(
        order(&listed),
        vec!["monday 09:00", "monday 14:00", "wednesday 08:00"]
    );
}

#[tokio::test]
async fn test_unscoped_listing_keeps_ties_in_store_order() {
    let ctx = TestContext::new();
    let math = ctx
        .create(slot_body(Uuid::new_v4(), "monday", "08:00", "09:00"))
        .await;
    let physics = ctx
        .create(slot_body(Uuid::new_v4(), "monday", "08:00", "09:00"))
        .await;

    let listed = ctx.server.get("/api/slots").await.json::<Vec<Slot>>();

    assert_eq!(listed, vec![math, physics]);
}

#[tokio::test]
async fn test_list_filters_by_query() {
    let ctx = TestContext::new();
    let math = Uuid::new_v4();
    ctx.create(slot_body(math, "monday", "08:00", "09:00")).await;
    ctx.create(slot_body(math, "friday", "08:00", "09:00")).await;
    ctx.create(slot_body(Uuid::new_v4(), "friday", "10:00", "11:00"))
        .await;

    let response = ctx
        .server
        .get("/api/slots")
        .add_query_param("subject_id", math)
        .add_query_param("weekday", "sexta")
        .await;

    let listed = response.json::<Vec<Slot>>();
    assert_eq!(order(&listed), vec!["friday 08:00"]);

    let response = ctx
        .server
        .get("/api/slots")
        .add_query_param("weekday", "sunday")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_same_values_succeeds() {
    let ctx = TestContext::new();
    let math = Uuid::new_v4();
    let body = slot_body(math, "thursday", "13:00", "14:40");
    let slot = ctx.create(body.clone()).await;

    let response = ctx
        .server
        .put(&format!("/api/slots/{}", slot.id))
        .json(&body)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Slot>(), slot);
}

#[tokio::test]
async fn test_update_into_conflict_is_rejected() {
    let ctx = TestContext::new();
    let math = Uuid::new_v4();
    ctx.create(slot_body(math, "monday", "08:00", "09:00")).await;
    let movable = ctx.create(slot_body(math, "monday", "10:00", "11:00")).await;

    let response = ctx
        .server
        .put(&format!("/api/slots/{}", movable.id))
        .json(&slot_body(math, "monday", "08:30", "09:30"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_unknown_slot_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .put(&format!("/api/slots/{}", Uuid::new_v4()))
        .json(&slot_body(Uuid::new_v4(), "monday", "08:00", "09:00"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_slot() {
    let ctx = TestContext::new();
    let slot = ctx
        .create(slot_body(Uuid::new_v4(), "saturday", "08:00", "12:00"))
        .await;
    let path = format!("/api/slots/{}", slot.id);

    ctx.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let listed = ctx.server.get("/api/slots").await.json::<Vec<Slot>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_bad_request() {
    let ctx = TestContext::new();

    ctx.server
        .delete("/api/slots/not-a-uuid")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_section_scope_conflicts_across_subjects() {
    let ctx = TestContext::with_store(Arc::new(MemorySlotStore::new()), ScopeKey::Section);

    let mut first = slot_body(Uuid::new_v4(), "friday", "19:00", "20:40");
    first["section"] = json!("3A");
    ctx.create(first).await;

    let mut clash = slot_body(Uuid::new_v4(), "friday", "20:00", "21:00");
    clash["section"] = json!("3A");
    ctx.server
        .post("/api/slots")
        .json(&clash)
        .await
        .assert_status(StatusCode::CONFLICT);

    let no_section = slot_body(Uuid::new_v4(), "friday", "20:00", "21:00");
    ctx.server
        .post("/api/slots")
        .json(&no_section)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weekly_timetable_groups_days() {
    let ctx = TestContext::new();
    let subject = Uuid::new_v4();
    ctx.create(slot_body(subject, "friday", "10:00", "11:00")).await;
    ctx.create(slot_body(subject, "tuesday", "13:00", "14:00")).await;
    ctx.create(slot_body(subject, "friday", "08:00", "09:00")).await;

    let body = ctx.server.get("/api/slots/timetable").await.json::<Value>();

    let days: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|day| day["weekday"].as_str().unwrap())
        .collect();
    assert_eq!(days, vec!["tuesday", "friday"]);
    assert_eq!(body[1]["slots"][0]["start_time"], "08:00");
}

#[tokio::test]
async fn test_conflict_audit_reports_out_of_band_rows() {
    let math = Uuid::new_v4();
    let first = stored_slot(math, Weekday::Monday, "08:00", "10:00");
    let second = stored_slot(math, Weekday::Monday, "09:00", "11:00");
    let store = MemorySlotStore::with_slots(vec![
        first.clone(),
        second.clone(),
        stored_slot(math, Weekday::Monday, "11:00", "12:00"),
    ]);
    let ctx = TestContext::with_store(Arc::new(store), ScopeKey::Subject);

    let body = ctx.server.get("/api/slots/conflicts").await.json::<Value>();

    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["first"]["id"], json!(first.id));
    assert_eq!(body[0]["second"]["id"], json!(second.id));
}

#[tokio::test]
async fn test_store_failure_is_reported_and_nothing_written() {
    let math = Uuid::new_v4();
    let mut store = MockSlotStore::new();
    store
        .expect_list_slots()
        .with(predicate::eq(SlotFilter {
            subject_id: Some(math),
            section: None,
            weekday: Some(Weekday::Monday),
        }))
        .times(1)
        .returning(|_| Ok(Vec::new()));
    store
        .expect_create_slot()
        .times(1)
        .returning(|_| Err(ScheduleError::Store(eyre::eyre!("connection refused"))));
    let ctx = TestContext::with_store(Arc::new(store), ScopeKey::Subject);

    let response = ctx
        .server
        .post("/api/slots")
        .json(&slot_body(math, "monday", "08:00", "09:00"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Operation failed");
    assert!(body["details"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_health_reports_scope_key() {
    let ctx = TestContext::with_store(Arc::new(MemorySlotStore::new()), ScopeKey::Section);

    let body = ctx.server.get("/health").await.json::<Value>();

    assert_eq!(body, json!({ "status": "ok", "scope_key": "section" }));
}
