//! One-shot flash messages stored in the session.

use tower_sessions::Session;

use crate::error::AppError;

const FLASH_KEY: &str = "flash";

/// Queue a message for the next rendered page.
pub async fn push(session: &Session, message: impl Into<String>) -> Result<(), AppError> {
    let mut messages: Vec<String> = session.get(FLASH_KEY).await?.unwrap_or_default();
    messages.push(message.into());
    session.insert(FLASH_KEY, messages).await?;
    Ok(())
}

/// Drain all queued messages; they are shown exactly once.
pub async fn take(session: &Session) -> Result<Vec<String>, AppError> {
    Ok(session
        .remove::<Vec<String>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}
