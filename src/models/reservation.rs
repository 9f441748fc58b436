use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::database::Database;

#[derive(Debug, Clone, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub passenger_name: String,
    pub seat_row: i32,
    pub seat_column: i32,
    pub eticket: String,
    pub created: NaiveDateTime,
}

impl Reservation {
    pub async fn all(db: &Database) -> Result<Vec<Reservation>, sqlx::Error> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations")
            .fetch_all(&db.pool)
            .await
    }

    // Dashboard listing, ordered by seat coordinates
    pub async fn all_by_seat(db: &Database) -> Result<Vec<Reservation>, sqlx::Error> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations ORDER BY seat_row, seat_column",
        )
        .fetch_all(&db.pool)
        .await
    }

    pub async fn find_by_seat(
        seat_row: i32,
        seat_column: i32,
        db: &Database,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE seat_row = $1 AND seat_column = $2",
        )
        .bind(seat_row)
        .bind(seat_column)
        .fetch_optional(&db.pool)
        .await
    }

    pub async fn eticket_exists(eticket: &str, db: &Database) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM reservations WHERE eticket = $1)")
            .bind(eticket)
            .fetch_one(&db.pool)
            .await
    }

    pub async fn create(
        passenger_name: &str,
        seat_row: i32,
        seat_column: i32,
        eticket: &str,
        db: &Database,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO reservations (passenger_name, seat_row, seat_column, eticket, created)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(passenger_name)
        .bind(seat_row)
        .bind(seat_column)
        .bind(eticket)
        .bind(chrono::Local::now().naive_local())
        .fetch_one(&db.pool)
        .await
    }

    pub async fn delete_by_id(id: i64, db: &Database) -> Result<bool, sqlx::Error> {
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&db.pool)
            .await
            .map(|r| r.rows_affected() > 0)
    }
}
