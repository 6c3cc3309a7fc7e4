use anyhow::Result;
use futures_util::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client, Collection,
};
use serde::{Deserialize, Serialize};

// Database used when the connection URI carries no path component.
const DEFAULT_DATABASE: &str = "test";
const COLLECTION: &str = "todos";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TodoRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Handle to the task record store. Cheap to clone; clones share the
/// driver's connection pool.
#[derive(Clone)]
pub struct TodoStore {
    coll: Collection<TodoRecord>,
}

impl TodoStore {
    /// Open a store handle against `uri`. The driver connects lazily, so
    /// this succeeds without a reachable server; the first operation
    /// surfaces any connection failure.
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        Ok(Self {
            coll: db.collection(COLLECTION),
        })
    }

    /// All records, in storage order.
    pub async fn list(&self) -> Result<Vec<TodoRecord>> {
        let cursor = self.coll.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new record with a fresh id and `done = false`.
    pub async fn insert(&self, task: Option<String>) -> Result<TodoRecord> {
        let record = TodoRecord {
            id: ObjectId::new(),
            task,
            done: false,
        };
        self.coll.insert_one(&record).await?;
        Ok(record)
    }

    /// Set `done = true` on the matching record. Returns the record as it
    /// was before the flip (driver default return-document), or `None`
    /// when no record matches. A malformed `id` is a store error.
    pub async fn complete(&self, id: &str) -> Result<Option<TodoRecord>> {
        let id = ObjectId::parse_str(id)?;
        let record = self
            .coll
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": { "done": true } })
            .await?;
        Ok(record)
    }

    /// Remove the matching record, returning it, or `None` when absent.
    pub async fn remove(&self, id: &str) -> Result<Option<TodoRecord>> {
        let id = ObjectId::parse_str(id)?;
        let record = self.coll.find_one_and_delete(doc! { "_id": id }).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn record_document_shape() {
        let record = TodoRecord {
            id: ObjectId::new(),
            task: Some("buy milk".into()),
            done: false,
        };
        let doc = bson::to_document(&record).expect("to_document");
        assert!(doc.get_object_id("_id").is_ok());
        assert_eq!(doc.get_str("task").ok(), Some("buy milk"));
        assert_eq!(doc.get_bool("done").ok(), Some(false));
    }

    #[test]
    fn absent_task_is_omitted_from_document() {
        let record = TodoRecord {
            id: ObjectId::new(),
            task: None,
            done: true,
        };
        let doc = bson::to_document(&record).expect("to_document");
        assert!(doc.get("task").is_none());
        assert_eq!(doc.get_bool("done").ok(), Some(true));
    }

    #[test]
    fn done_defaults_false_when_missing() {
        // Documents written before the flag existed deserialize as open.
        let doc = bson::doc! { "_id": ObjectId::new(), "task": "t" };
        let record: TodoRecord = bson::from_document(doc).expect("from_document");
        assert!(!record.done);
    }

    #[test]
    fn malformed_id_is_rejected_by_parse() {
        assert!(ObjectId::parse_str("not-a-hex-id").is_err());
        assert!(ObjectId::parse_str("").is_err());
    }
}
