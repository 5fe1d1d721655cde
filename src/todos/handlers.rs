use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::{ApiError, ApiJson},
    state::AppState,
    todos::{
        dto::{ClearResponse, ReplaceResponse, TodoItem},
        repo,
    },
};

pub fn todo_routes() -> Router<AppState> {
    Router::new().route(
        "/todos",
        get(list_todos).put(put_todos).delete(delete_todos),
    )
}

#[instrument(skip(state))]
pub async fn list_todos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let rows = repo::list_by_user(&state.db, user_id).await?;
    Ok(Json(rows.into_iter().map(TodoItem::from).collect()))
}

/// Full-snapshot save: the caller's todo set becomes exactly the submitted
/// items. Last write wins between concurrent saves.
#[instrument(skip(state, items))]
pub async fn put_todos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(items): ApiJson<Vec<TodoItem>>,
) -> Result<Json<ReplaceResponse>, ApiError> {
    let count = items.len();
    repo::replace_for_user(&state.db, user_id, &items).await?;
    info!(%user_id, count, "todo set replaced");
    Ok(Json(ReplaceResponse { ok: true, count }))
}

#[instrument(skip(state))]
pub async fn delete_todos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ClearResponse>, ApiError> {
    repo::delete_for_user(&state.db, user_id).await?;
    info!(%user_id, "todos cleared");
    Ok(Json(ClearResponse { ok: true }))
}
