use askama::Template;
use axum::{response::Html, routing::get, Router};
use std::sync::Arc;
use tower_sessions::Session;

use crate::error::AppError;
use crate::flash;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(menu))
}

#[derive(Template)]
#[template(path = "menu.html")]
struct MenuTemplate {
    flash: Vec<String>,
}

async fn menu(session: Session) -> Result<Html<String>, AppError> {
    let page = MenuTemplate {
        flash: flash::take(&session).await?,
    };
    Ok(Html(page.render()?))
}
