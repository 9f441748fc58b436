pub mod admin;
pub mod reservation;

pub use admin::Admin;
pub use reservation::Reservation;
