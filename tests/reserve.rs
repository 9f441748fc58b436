use axum::http::StatusCode;

mod common;

use common::TestEnv;

#[tokio::test]
async fn reserve_page_shows_an_empty_chart() {
    let env = TestEnv::new().await;

    let response = env.app.get("/reserve").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.text();
    assert!(body.contains("Reserve a Seat"));
    assert!(!body.contains("class=\"taken\""));
}

#[tokio::test]
async fn booking_a_seat_issues_an_eticket() {
    let env = TestEnv::new().await;

    let response = env.reserve("Alice", "3", "2").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/reserve");

    let body = env.app.get("/reserve").await.text();
    assert!(body.contains("Reservation successful. eTicket: "));

    let (name, eticket): (String, String) = sqlx::query_as(
        "SELECT passenger_name, eticket FROM reservations WHERE seat_row = 3 AND seat_column = 2",
    )
    .fetch_one(&env.db.pool)
    .await
    .unwrap();

    assert_eq!(name, "Alice");
    assert_eq!(eticket.len(), 8);
    assert!(eticket
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn booked_seat_shows_as_taken_on_the_chart() {
    let env = TestEnv::new().await;

    env.reserve("Alice", "1", "1").await;
    env.app.get("/reserve").await; // drain the success flash

    let body = env.app.get("/reserve").await.text();
    assert!(body.contains("class=\"taken\""));
}

#[tokio::test]
async fn booking_the_same_seat_twice_is_rejected() {
    let env = TestEnv::new().await;

    env.reserve("Alice", "7", "2").await;
    let response = env.reserve("Bob", "7", "2").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let body = env.app.get("/reserve").await.text();
    assert!(body.contains("Seat already reserved."));

    assert_eq!(env.reservation_count().await, 1);
}

#[tokio::test]
async fn missing_passenger_name_is_rejected() {
    let env = TestEnv::new().await;

    env.reserve("   ", "2", "2").await;

    let body = env.app.get("/reserve").await.text();
    assert!(body.contains("Passenger name is required."));
    assert_eq!(env.reservation_count().await, 0);
}

#[tokio::test]
async fn omitted_passenger_name_field_flashes_instead_of_422() {
    let env = TestEnv::new().await;

    let response = env
        .app
        .post("/reserve")
        .form(&[("seat_row", "2"), ("seat_column", "2")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/reserve");

    let body = env.app.get("/reserve").await.text();
    assert!(body.contains("Passenger name is required."));
    assert_eq!(env.reservation_count().await, 0);
}

#[tokio::test]
async fn out_of_range_seats_are_rejected() {
    let env = TestEnv::new().await;

    for (row, column) in [("13", "1"), ("0", "1"), ("1", "5"), ("1", "0")] {
        env.reserve("Alice", row, column).await;
        let body = env.app.get("/reserve").await.text();
        assert!(body.contains("Invalid seat selection."));
    }

    assert_eq!(env.reservation_count().await, 0);
}

#[tokio::test]
async fn non_numeric_seat_input_is_rejected_not_a_server_error() {
    let env = TestEnv::new().await;

    let response = env.reserve("Alice", "abc", "2").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let body = env.app.get("/reserve").await.text();
    assert!(body.contains("Invalid seat selection."));
    assert_eq!(env.reservation_count().await, 0);
}

#[tokio::test]
async fn eticket_codes_are_unique_across_reservations() {
    let env = TestEnv::new().await;

    for row in 1..=6 {
        env.reserve("Alice", &row.to_string(), "1").await;
    }

    let (total, distinct): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COUNT(DISTINCT eticket) FROM reservations")
            .fetch_one(&env.db.pool)
            .await
            .unwrap();

    assert_eq!(total, 6);
    assert_eq!(distinct, 6);
}

#[tokio::test]
async fn flash_messages_render_only_once() {
    let env = TestEnv::new().await;

    env.reserve("Alice", "1", "1").await;

    let first = env.app.get("/reserve").await.text();
    assert!(first.contains("Reservation successful."));

    let second = env.app.get("/reserve").await.text();
    assert!(!second.contains("Reservation successful."));
}
