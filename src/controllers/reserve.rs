use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use crate::error::AppError;
use crate::flash;
use crate::models::Reservation;
use crate::seating::{self, SeatCell};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/reserve", get(show_chart).post(book_seat))
}

#[derive(Template)]
#[template(path = "reserve.html")]
struct ReserveTemplate {
    flash: Vec<String>,
    chart: Vec<Vec<SeatCell>>,
}

// GET /reserve
async fn show_chart(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let page = ReserveTemplate {
        flash: flash::take(&session).await?,
        chart: seating::build_seating_chart(&state.db).await?,
    };
    Ok(Html(page.render()?))
}

// Seat coordinates arrive as raw text; anything non-numeric is treated as
// seat 0 and rejected by the validity check rather than a 4xx. Absent keys
// default to empty strings and fall into the same flash paths.
#[derive(Debug, Deserialize)]
pub struct ReserveForm {
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub seat_row: String,
    #[serde(default)]
    pub seat_column: String,
}

// POST /reserve
async fn book_seat(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<ReserveForm>,
) -> Result<Redirect, AppError> {
    let passenger_name = form.passenger_name.trim();
    let seat_row: i32 = form.seat_row.trim().parse().unwrap_or(0);
    let seat_column: i32 = form.seat_column.trim().parse().unwrap_or(0);

    if passenger_name.is_empty() {
        flash::push(&session, "Passenger name is required.").await?;
        return Ok(Redirect::to("/reserve"));
    }

    if !seating::seat_is_valid(seat_row, seat_column) {
        flash::push(&session, "Invalid seat selection.").await?;
        return Ok(Redirect::to("/reserve"));
    }

    if Reservation::find_by_seat(seat_row, seat_column, &state.db)
        .await?
        .is_some()
    {
        flash::push(&session, "Seat already reserved.").await?;
        return Ok(Redirect::to("/reserve"));
    }

    let eticket = seating::generate_unique_eticket(&state.db).await?;
    Reservation::create(passenger_name, seat_row, seat_column, &eticket, &state.db).await?;

    tracing::info!("reserved seat {}-{} for {}", seat_row, seat_column, passenger_name);

    flash::push(&session, format!("Reservation successful. eTicket: {eticket}")).await?;
    Ok(Redirect::to("/reserve"))
}
