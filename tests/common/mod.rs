use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use seat_reservation::{config::Config, database::Database, AppState};

/// A test app backed by a throwaway in-memory database.
///
/// The pool is capped at one connection so every request sees the same
/// in-memory SQLite instance. Cookies persist across requests, so session
/// state (admin login, flash messages) behaves as in a real browser.
pub struct TestEnv {
    pub app: TestServer,
    pub db: Database,
}

impl TestEnv {
    pub async fn new() -> Self {
        let db = Database::new("sqlite::memory:", 1)
            .await
            .expect("failed to connect to test database");
        db.run_migrations().await.expect("failed to run migrations");

        let state = Arc::new(AppState {
            db: db.clone(),
            config: Config::from_env(),
        });
        let app = seat_reservation::router(state);

        let server = TestServer::builder()
            .save_cookies()
            .build(app)
            .expect("failed to build test server");

        TestEnv { app: server, db }
    }

    pub async fn reserve(&self, name: &str, row: &str, column: &str) -> TestResponse {
        self.app
            .post("/reserve")
            .form(&[
                ("passenger_name", name),
                ("seat_row", row),
                ("seat_column", column),
            ])
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.app
            .post("/admin/login")
            .form(&[("username", username), ("password", password)])
            .await
    }

    pub async fn login_as_seeded_admin(&self) -> TestResponse {
        self.login("admin", "admin123").await
    }

    pub async fn reservation_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.db.pool)
            .await
            .expect("failed to count reservations")
    }
}
