use sqlx::PgPool;
use tracing::error;

use crate::auth::repo_types::User;
use crate::error::ApiError;

impl User {
    /// Find a user by (already normalized) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "find user by email failed");
            ApiError::persistence()
        })
    }

    /// Create a new user with a hashed password. The unique constraint on
    /// `email` is the source of truth for duplicates; a violation maps to
    /// `DuplicateEmail`.
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApiError::DuplicateEmail
            }
            e => {
                error!(error = %e, "create user failed");
                ApiError::persistence()
            }
        })
    }
}
