pub mod admin;
pub mod menu;
pub mod reserve;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(menu::routes())
        .merge(reserve::routes())
        .merge(admin::routes())
}
