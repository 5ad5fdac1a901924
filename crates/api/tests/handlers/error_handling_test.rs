use academico_api::middleware::error_handling::map_error;
use academico_core::{
    errors::ScheduleError,
    models::{TimeOfDay, Weekday},
};
use axum::http::StatusCode;
use rstest::rstest;
use uuid::Uuid;

fn time(hour: u16, minute: u16) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

#[rstest]
#[case(
    ScheduleError::InvalidRange { start: time(10, 0), end: time(9, 0) },
    StatusCode::BAD_REQUEST
)]
#[case(
    ScheduleError::OverlapConflict {
        conflicting_id: Uuid::new_v4(),
        weekday: Weekday::Monday,
        start: time(8, 0),
        end: time(9, 30),
    },
    StatusCode::CONFLICT
)]
#[case(ScheduleError::Validation("Unknown weekday".to_string()), StatusCode::BAD_REQUEST)]
#[case(ScheduleError::NotFound("Slot not found".to_string()), StatusCode::NOT_FOUND)]
#[case(
    ScheduleError::Store(eyre::eyre!("Database error")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: ScheduleError, #[case] expected: StatusCode) {
    let rejected_input = error.is_validation();

    let response = map_error(error);

    assert_eq!(response.status(), expected);
    // Input rejections are exactly the 400 and 409 responses
    assert_eq!(
        rejected_input,
        matches!(expected, StatusCode::BAD_REQUEST | StatusCode::CONFLICT)
    );
}
