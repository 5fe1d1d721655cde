use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;

/// Todo row as read back. `tags` lives in a jsonb column; the id is a
/// client-supplied opaque string and the table's primary key. The owner
/// column stays in the store; every query is already scoped to one user.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: String,
    pub text: String,
    pub priority: String,
    pub completed: bool,
    pub tags: Json<Vec<String>>,
    pub created_at: OffsetDateTime,
    pub completed_at: Option<OffsetDateTime>,
}
