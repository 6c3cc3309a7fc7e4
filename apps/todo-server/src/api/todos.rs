use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::{responses, AppState};
use todo_store::TodoRecord;

#[derive(Deserialize)]
pub(crate) struct AddTodoReq {
    #[serde(default)]
    pub task: Option<String>,
}

fn wire(record: &TodoRecord) -> Value {
    json!({
        "id": record.id.to_hex(),
        "task": record.task,
        "done": record.done,
    })
}

// Not-found is a successful `null`, never an error.
fn wire_opt(record: Option<TodoRecord>) -> Value {
    record.map(|r| wire(&r)).unwrap_or(Value::Null)
}

pub async fn todos_list(State(state): State<AppState>) -> axum::response::Response {
    match state.store().list().await {
        Ok(records) => Json(records.iter().map(wire).collect::<Vec<_>>()).into_response(),
        Err(err) => {
            warn!(target: "todos", "list failed: {err:?}");
            responses::store_error(err)
        }
    }
}

pub async fn todos_add(
    State(state): State<AppState>,
    Json(req): Json<AddTodoReq>,
) -> axum::response::Response {
    match state.store().insert(req.task).await {
        Ok(record) => Json(wire(&record)).into_response(),
        Err(err) => {
            warn!(target: "todos", "insert failed: {err:?}");
            responses::store_error(err)
        }
    }
}

pub async fn todos_complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.store().complete(&id).await {
        Ok(record) => Json(wire_opt(record)).into_response(),
        Err(err) => {
            warn!(target: "todos", "complete failed: {err:?}");
            responses::store_error(err)
        }
    }
}

pub async fn todos_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.store().remove(&id).await {
        Ok(record) => Json(wire_opt(record)).into_response(),
        Err(err) => {
            warn!(target: "todos", "delete failed: {err:?}");
            responses::store_error(err)
        }
    }
}
