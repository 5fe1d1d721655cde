use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use tracing::error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::todos::dto::TodoItem;
use crate::todos::repo_types::TodoRow;

/// All todos for one user, oldest first. The id tiebreak only matters for
/// rows that share a timestamp and keeps the listing deterministic.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<TodoRow>, ApiError> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, text, priority, completed, tags, created_at, completed_at
        FROM todos
        WHERE user_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .map_err(|e| {
        error!(error = %e, %user_id, "list todos failed");
        ApiError::persistence()
    })
}

/// Replace the user's todo set wholesale: delete everything, then insert the
/// new snapshot. One transaction; on any failure the transaction is rolled
/// back and the prior todo set stays intact.
pub async fn replace_for_user(
    db: &PgPool,
    user_id: Uuid,
    items: &[TodoItem],
) -> Result<(), ApiError> {
    let mut tx = db.begin().await.map_err(save_failed)?;

    match apply_snapshot(&mut tx, user_id, items).await {
        Ok(()) => tx.commit().await.map_err(save_failed),
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!(error = %rollback_err, %user_id, "rollback failed");
            }
            Err(e)
        }
    }
}

async fn apply_snapshot(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    items: &[TodoItem],
) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM todos WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(save_failed)?;

    for item in items {
        // Upsert keyed by id. After the delete above the conflict branch is
        // unreachable for the caller's own ids; it is kept so a re-supplied
        // id can never duplicate a row.
        let created_at = item.created_at.unwrap_or_else(OffsetDateTime::now_utc);
        sqlx::query(
            r#"
            INSERT INTO todos (id, user_id, text, priority, completed, tags, created_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                text = excluded.text,
                priority = excluded.priority,
                completed = excluded.completed,
                tags = excluded.tags,
                created_at = excluded.created_at,
                completed_at = excluded.completed_at
            "#,
        )
        .bind(&item.id)
        .bind(user_id)
        .bind(&item.text)
        .bind(&item.priority)
        .bind(item.completed)
        .bind(Json(&item.tags))
        .bind(created_at)
        .bind(item.completed_at)
        .execute(&mut **tx)
        .await
        .map_err(save_failed)?;
    }

    Ok(())
}

/// Remove all todos owned by the user.
pub async fn delete_for_user(db: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM todos WHERE user_id = $1")
        .bind(user_id)
        .execute(db)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "clear todos failed");
            ApiError::persistence()
        })?;
    Ok(())
}

fn save_failed(e: sqlx::Error) -> ApiError {
    error!(error = %e, "replace todos failed");
    ApiError::Persistence("Failed to save todos".into())
}
