use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::models::{DeleteResult, InsertOneResult, UpdateResult};
use crate::utils::AppError;

/// Collections held in process memory, for driving handlers without a server.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document, assigning an `_id` when it has none.
    pub async fn seed(&self, collection: &str, doc: Document) -> ObjectId {
        let result = self.insert_one(collection, doc).await.unwrap();
        ObjectId::parse_str(&result.inserted_id).unwrap()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn has_id(doc: &Document, id: &ObjectId) -> bool {
    matches!(doc.get_object_id("_id"), Ok(oid) if oid == *id)
}

fn field_matches(doc: &Document, field: &str, value: &Bson) -> bool {
    match (doc.get(field), value) {
        (None, Bson::Null) => true,
        (Some(found), expected) => found == expected,
        (None, _) => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, &id)).cloned()))
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| field_matches(d, field, &value)).cloned()))
    }

    async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<InsertOneResult, AppError> {
        if !doc.contains_key("_id") {
            doc.insert("_id", ObjectId::new());
        }
        let inserted_id = doc.get("_id").cloned().unwrap_or(Bson::Null);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(InsertOneResult::new(&inserted_id))
    }

    async fn set_fields_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, AppError> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| has_id(d, &id)))
        else {
            return Ok(UpdateResult::new(0, 0));
        };

        let mut modified = false;
        for (key, value) in fields {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }
        Ok(UpdateResult::new(1, u64::from(modified)))
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<DeleteResult, AppError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(DeleteResult::new(0));
        };
        match docs.iter().position(|d| has_id(d, &id)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(DeleteResult::new(1))
            }
            None => Ok(DeleteResult::new(0)),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
