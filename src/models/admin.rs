use sqlx::FromRow;

use crate::database::Database;

#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub username: String,
    pub password: String,
}

impl Admin {
    pub async fn find_by_username(
        username: &str,
        db: &Database,
    ) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = $1")
            .bind(username)
            .fetch_optional(&db.pool)
            .await
    }

    // Credentials are stored in plaintext, matching how they are seeded
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}
