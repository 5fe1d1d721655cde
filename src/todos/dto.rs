use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::todos::repo_types::TodoRow;

fn default_priority() -> String {
    "medium".to_string()
}

/// Wire shape of a single todo, used both in the `PUT /todos` body and the
/// `GET /todos` response. Timestamps travel as RFC 3339 under camelCase
/// names; `createdAt` may be omitted by the client and then defaults to
/// insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl From<TodoRow> for TodoItem {
    fn from(r: TodoRow) -> Self {
        Self {
            id: r.id,
            text: r.text,
            priority: r.priority,
            completed: r.completed,
            tags: r.tags.0,
            created_at: Some(r.created_at),
            completed_at: r.completed_at,
        }
    }
}

/// Response for `PUT /todos`.
#[derive(Debug, Serialize)]
pub struct ReplaceResponse {
    pub ok: bool,
    pub count: usize,
}

/// Response for `DELETE /todos`.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;
    use time::macros::datetime;

    #[test]
    fn minimal_item_gets_explicit_defaults() {
        let item: TodoItem = serde_json::from_str(r#"{"id":"1","text":"buy milk"}"#).unwrap();
        assert_eq!(item.id, "1");
        assert_eq!(item.text, "buy milk");
        assert_eq!(item.priority, "medium");
        assert!(!item.completed);
        assert!(item.tags.is_empty());
        assert!(item.created_at.is_none());
        assert!(item.completed_at.is_none());
    }

    #[test]
    fn timestamps_use_camel_case_rfc3339() {
        let item: TodoItem = serde_json::from_str(
            r#"{
                "id": "a",
                "text": "ship it",
                "priority": "high",
                "completed": true,
                "tags": ["work", "urgent"],
                "createdAt": "2024-03-01T10:00:00Z",
                "completedAt": "2024-03-02T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(item.created_at, Some(datetime!(2024-03-01 10:00 UTC)));
        assert_eq!(item.completed_at, Some(datetime!(2024-03-02 9:30 UTC)));
        assert_eq!(item.tags, vec!["work", "urgent"]);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["createdAt"], "2024-03-01T10:00:00Z");
        assert_eq!(json["completedAt"], "2024-03-02T09:30:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn row_converts_to_wire_item() {
        let row = TodoRow {
            id: "row-1".into(),
            text: "water plants".into(),
            priority: "low".into(),
            completed: false,
            tags: Json(vec!["home".into()]),
            created_at: datetime!(2024-01-15 8:00 UTC),
            completed_at: None,
        };

        let item = TodoItem::from(row);
        assert_eq!(item.id, "row-1");
        assert_eq!(item.tags, vec!["home"]);
        assert_eq!(item.created_at, Some(datetime!(2024-01-15 8:00 UTC)));

        // Owner stays server-side; the wire item has no user field.
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("userId").is_none());
        assert_eq!(json["completedAt"], serde_json::Value::Null);
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let res: Result<TodoItem, _> =
            serde_json::from_str(r#"{"id":"1","text":"x","createdAt":"yesterday"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn replace_response_shape() {
        let json = serde_json::to_value(ReplaceResponse { ok: true, count: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true, "count": 2 }));
        let json = serde_json::to_value(ClearResponse { ok: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }
}
