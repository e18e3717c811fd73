use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::models::{DeleteResult, InsertOneResult, UpdateResult};
use crate::utils::AppError;

pub const SCHOOL_INFO: &str = "schoolInfo";
pub const TEACHERS: &str = "teachers";
pub const CLASSES: &str = "classes";
pub const USERS: &str = "users";
pub const STUDENTS: &str = "students";

/// Primitive operations over independent document collections.
///
/// Every collection is a root aggregate: no joins, no cascades. Handlers
/// compose these primitives and echo the results.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, AppError>;

    /// First document whose `field` equals `value`. A `Bson::Null` value also
    /// matches documents missing the field.
    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError>;

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertOneResult, AppError>;

    /// `$set` of `fields` on the document with the given id.
    async fn set_fields_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, AppError>;

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<DeleteResult, AppError>;

    /// Round trip to the server, used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Parses a 24 hex character object id taken from a request path.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidObjectId(id.to_string()))
}
