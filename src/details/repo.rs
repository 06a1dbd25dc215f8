use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Contact details, at most one row per user (unique constraint on user_id).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phone: String,
    pub address: String,
    pub email: String,
}

impl UserDetails {
    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> Result<Option<UserDetails>, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            SELECT id, user_id, phone, address, email
            FROM user_details
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        phone: &str,
        address: &str,
        email: &str,
    ) -> Result<UserDetails, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            INSERT INTO user_details (user_id, phone, address, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, phone, address, email
            "#,
        )
        .bind(user_id)
        .bind(phone)
        .bind(address)
        .bind(email)
        .fetch_one(db)
        .await
    }

    /// Overwrite in place, last write wins.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        phone: &str,
        address: &str,
        email: &str,
    ) -> Result<UserDetails, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            UPDATE user_details
            SET phone = $2, address = $3, email = $4
            WHERE user_id = $1
            RETURNING id, user_id, phone, address, email
            "#,
        )
        .bind(user_id)
        .bind(phone)
        .bind(address)
        .bind(email)
        .fetch_one(db)
        .await
    }
}
