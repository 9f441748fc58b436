use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use crate::error::AppError;
use crate::flash;
use crate::middleware::{AdminSession, ADMIN_SESSION_KEY};
use crate::models::{Admin, Reservation};
use crate::seating::{self, SeatCell};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/login", get(login_page).post(login))
        .route("/admin/delete/{id}", post(delete_reservation))
        .route("/admin/logout", post(logout))
}

#[derive(Template)]
#[template(path = "admin_login.html")]
struct LoginTemplate {
    flash: Vec<String>,
}

// GET /admin/login
async fn login_page(session: Session) -> Result<Html<String>, AppError> {
    let page = LoginTemplate {
        flash: flash::take(&session).await?,
    };
    Ok(Html(page.render()?))
}

// Absent keys default to empty strings so a malformed post flashes
// "Invalid admin login." instead of a 422.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// POST /admin/login
async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let username = form.username.trim();
    let password = form.password.trim();

    match Admin::find_by_username(username, &state.db).await? {
        Some(admin) if admin.verify_password(password) => {
            session.insert(ADMIN_SESSION_KEY, true).await?;
            tracing::info!("admin {} logged in", username);
            Ok(Redirect::to("/admin"))
        }
        _ => {
            flash::push(&session, "Invalid admin login.").await?;
            Ok(Redirect::to("/admin/login"))
        }
    }
}

#[derive(Template)]
#[template(path = "admin.html")]
struct DashboardTemplate {
    flash: Vec<String>,
    chart: Vec<Vec<SeatCell>>,
    reservations: Vec<Reservation>,
    sales: i64,
}

// GET /admin
async fn dashboard(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let page = DashboardTemplate {
        flash: flash::take(&session).await?,
        chart: seating::build_seating_chart(&state.db).await?,
        reservations: Reservation::all_by_seat(&state.db).await?,
        sales: seating::total_sales(&state.db).await?,
    };
    Ok(Html(page.render()?))
}

// POST /admin/delete/{id}
async fn delete_reservation(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if Reservation::delete_by_id(id, &state.db).await? {
        tracing::info!("deleted reservation {}", id);
        flash::push(&session, "Reservation deleted.").await?;
    }
    Ok(Redirect::to("/admin"))
}

// POST /admin/logout
async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to("/"))
}
