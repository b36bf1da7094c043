use crate::utils::AppError;
use mongodb::bson::{self, oid::ObjectId, Bson, DateTime, Document};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Keys the store assigns itself; client-supplied values are dropped.
const GENERATED_KEYS: [&str; 2] = ["_id", "created_at"];

/// A user document as stored in the `users` collection.
///
/// Apart from `id` the document is schema-less: whatever attributes the client
/// sent are kept verbatim next to the generated `_id` and `created_at` keys.
#[derive(Debug, Clone, PartialEq)]
pub struct User(Document);

/// Body of `POST /user`, checked against the minimal schema: an `id` that is
/// a string, or a number cast to its decimal string.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: String,
    pub attributes: Document,
}

impl User {
    /// Stamps a new document with its persistence-generated defaults.
    pub fn from_new(new_user: NewUser) -> Self {
        let mut doc = Document::new();
        doc.insert("_id", ObjectId::new());
        doc.insert("id", new_user.id);
        for (key, value) in new_user.attributes {
            doc.insert(key, value);
        }
        doc.insert("created_at", DateTime::now());
        User(doc)
    }

    pub fn from_document(doc: Document) -> Self {
        User(doc)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get_str("id").ok()
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    /// JSON view of the document: `_id` as a hex string, timestamps as RFC 3339.
    pub fn to_json(&self) -> Value {
        document_to_json(&self.0)
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl TryFrom<Map<String, Value>> for NewUser {
    type Error = AppError;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match body.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(number)) => number.to_string(),
            Some(other) => {
                return Err(AppError::InvalidRequest(format!(
                    "field 'id' must be a string or a number, got {}",
                    other
                )))
            }
            None => return Err(AppError::InvalidRequest("missing field 'id'".to_string())),
        };

        for key in GENERATED_KEYS {
            body.remove(key);
        }

        let attributes = bson::to_document(&body)
            .map_err(|e| AppError::InvalidRequest(format!("unsupported attribute value: {}", e)))?;

        Ok(NewUser { id, attributes })
    }
}

/// Nested documents and arrays are walked too, so seeded data renders the
/// same way as documents this service wrote.
fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        ),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}

fn document_to_json(doc: &Document) -> Value {
    Value::Object(
        doc.iter()
            .map(|(key, value)| (key.clone(), bson_to_json(value)))
            .collect(),
    )
}

/// OpenAPI view of a stored user; extra attributes are returned verbatim.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserSchema {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub id: String,
    pub created_at: String,
}

/// OpenAPI view of a create request body; extra attributes are stored verbatim.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CreateUserSchema {
    pub id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    pub success: bool,
}
