use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database};

use super::DocumentStore;
use crate::models::{DeleteResult, InsertOneResult, UpdateResult};
use crate::utils::AppError;

/// Process-wide MongoDB handle. The driver owns the connection pool; clones
/// share it.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Builds the client once at startup. A failed first ping is logged and
    /// not retried; the driver reconnects on the next operation.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;
        client_options.app_name = Some("school-service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);
        let mongodb = Self { client, db };

        match mongodb.ping().await {
            Ok(()) => log::info!("✅ MongoDB connected: database {}", db_name),
            Err(e) => log::error!("❌ MongoDB ping failed at startup: {}", e),
        }

        Ok(mongodb)
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, AppError> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError> {
        let mut filter = Document::new();
        filter.insert(field, value);
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertOneResult, AppError> {
        let result = self.collection(collection).insert_one(doc).await?;
        Ok(InsertOneResult::new(&result.inserted_id))
    }

    async fn set_fields_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, AppError> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(UpdateResult::new(result.matched_count, result.modified_count))
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<DeleteResult, AppError> {
        let result = self.collection(collection).delete_one(doc! { "_id": id }).await?;
        Ok(DeleteResult::new(result.deleted_count))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client.database("admin").run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
