use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connect to database")
}

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    email text UNIQUE NOT NULL,
    password_hash text NOT NULL,
    created_at timestamptz NOT NULL DEFAULT now()
)
"#;

const CREATE_TODOS: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id text PRIMARY KEY,
    user_id uuid NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    text text NOT NULL,
    priority text NOT NULL DEFAULT 'medium',
    completed boolean NOT NULL DEFAULT false,
    tags jsonb NOT NULL DEFAULT '[]'::jsonb,
    created_at timestamptz NOT NULL DEFAULT now(),
    completed_at timestamptz
)
"#;

/// Bootstrap the schema. Idempotent, runs on every startup; the caller
/// treats a failure as fatal.
pub async fn migrate(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS)
        .execute(db)
        .await
        .context("create users table")?;
    sqlx::query(CREATE_TODOS)
        .execute(db)
        .await
        .context("create todos table")?;
    Ok(())
}
