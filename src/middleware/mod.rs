use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use tower_sessions::Session;

pub const ADMIN_SESSION_KEY: &str = "admin_logged_in";

/// Extractor gating admin routes on the session login flag.
///
/// Handlers that take an `AdminSession` argument only run for a logged-in
/// admin; anyone else is redirected to the login page.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/admin/login"))?;

        let logged_in = session
            .get::<bool>(ADMIN_SESSION_KEY)
            .await
            .ok()
            .flatten()
            .unwrap_or(false);

        if logged_in {
            Ok(AdminSession)
        } else {
            Err(Redirect::to("/admin/login"))
        }
    }
}
