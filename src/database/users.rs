use super::MongoDB;
use crate::models::{NewUser, User};
use crate::utils::AppError;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// Storage behind the `/user` resource.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All documents of the collection, unfiltered and in storage order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// First document whose `id` field equals `id` exactly.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Persists a new document and returns it with its generated keys.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoUserRepository {
    db: MongoDB,
    collection: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(db: &MongoDB, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection::<Document>(collection_name),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(User::from_document).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let found = self.collection.find_one(doc! { "id": id }).await?;
        Ok(found.map(User::from_document))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User::from_new(new_user);
        self.collection.insert_one(user.as_document()).await?;
        Ok(user)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
