use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Renders a stored document the way browser clients expect it: object ids
/// as plain hex strings, dates as RFC 3339, everything else as relaxed
/// extended JSON.
pub fn document_to_json(doc: Document) -> Value {
    Value::Object(doc.into_iter().map(|(k, v)| (k, bson_to_json(v))).collect())
}

pub fn documents_to_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_object_id_becomes_hex_string() {
        let oid = ObjectId::new();
        let json = document_to_json(doc! { "_id": oid, "name": "Grade 5" });
        assert_eq!(json["_id"], Value::String(oid.to_hex()));
        assert_eq!(json["name"], "Grade 5");
    }

    #[test]
    fn test_nested_values_are_converted() {
        let oid = ObjectId::new();
        let json = document_to_json(doc! {
            "studentId": 4321_i32,
            "guardian": { "ref": oid },
            "subjects": ["math", { "teacher": oid }],
        });
        assert_eq!(json["studentId"], 4321);
        assert_eq!(json["guardian"]["ref"], Value::String(oid.to_hex()));
        assert_eq!(json["subjects"][1]["teacher"], Value::String(oid.to_hex()));
    }
}
