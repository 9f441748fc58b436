//! Seat layout, pricing, and eTicket code generation.

use rand::Rng;

use crate::database::Database;
use crate::models::Reservation;

pub const SEAT_ROWS: i32 = 12;
pub const SEAT_COLUMNS: i32 = 4;

const ETICKET_LEN: usize = 8;
const ETICKET_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed per-seat pricing, recomputed identically on every call.
pub fn cost_matrix() -> Vec<Vec<i64>> {
    (0..SEAT_ROWS).map(|_| vec![100, 75, 50, 100]).collect()
}

pub fn seat_price(seat_row: i32, seat_column: i32) -> i64 {
    cost_matrix()[(seat_row - 1) as usize][(seat_column - 1) as usize]
}

pub fn seat_is_valid(seat_row: i32, seat_column: i32) -> bool {
    (1..=SEAT_ROWS).contains(&seat_row) && (1..=SEAT_COLUMNS).contains(&seat_column)
}

/// A single cell of the rendered seating chart.
#[derive(Debug, Clone)]
pub struct SeatCell {
    pub row: i32,
    pub column: i32,
    pub taken: bool,
    pub eticket: String,
    pub price: i64,
}

/// Join the pricing matrix with current occupancy into a 12x4 grid.
pub async fn build_seating_chart(db: &Database) -> Result<Vec<Vec<SeatCell>>, sqlx::Error> {
    let mut chart: Vec<Vec<SeatCell>> = (1..=SEAT_ROWS)
        .map(|row| {
            (1..=SEAT_COLUMNS)
                .map(|column| SeatCell {
                    row,
                    column,
                    taken: false,
                    eticket: String::new(),
                    price: seat_price(row, column),
                })
                .collect()
        })
        .collect();

    for res in Reservation::all(db).await? {
        if seat_is_valid(res.seat_row, res.seat_column) {
            let cell = &mut chart[(res.seat_row - 1) as usize][(res.seat_column - 1) as usize];
            cell.taken = true;
            cell.eticket = res.eticket;
        }
    }

    Ok(chart)
}

/// Sum of the price matrix entries for all booked seats.
pub async fn total_sales(db: &Database) -> Result<i64, sqlx::Error> {
    let total = Reservation::all(db)
        .await?
        .iter()
        .filter(|r| seat_is_valid(r.seat_row, r.seat_column))
        .map(|r| seat_price(r.seat_row, r.seat_column))
        .sum();
    Ok(total)
}

// rand::rng() is ChaCha-based, fine for ticket codes
fn make_eticket_code() -> String {
    let mut rng = rand::rng();
    (0..ETICKET_LEN)
        .map(|_| ETICKET_ALPHABET[rng.random_range(0..ETICKET_ALPHABET.len())] as char)
        .collect()
}

/// Generate an eTicket code, retrying until it collides with no existing one.
pub async fn generate_unique_eticket(db: &Database) -> Result<String, sqlx::Error> {
    loop {
        let code = make_eticket_code();
        if !Reservation::eticket_exists(&code, db).await? {
            return Ok(code);
        }
    }
}
