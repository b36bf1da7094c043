pub mod memory;
pub mod users;
#[cfg(test)]
pub mod testing;

pub use memory::InMemoryUserRepository;
pub use users::{MongoUserRepository, UserRepository};

use crate::utils::AppError;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;

const DEFAULT_DATABASE: &str = "bookmarker";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, users_collection: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db_name = database_name(&client_options);

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };
        mongodb.ensure_indexes(users_collection).await;

        Ok(mongodb)
    }

    /// Lookups go through `id`, not `_id`, so that field gets its own index.
    async fn ensure_indexes(&self, users_collection: &str) {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<mongodb::bson::Document>(users_collection);
        let id_index = IndexModel::builder().keys(doc! { "id": 1 }).build();

        match users.create_index(id_index).await {
            Ok(_) => log::info!("   ✅ Index created: {}(id)", users_collection),
            Err(e) => log::warn!("   ⚠️  Could not create index {}(id): {}", users_collection, e),
        }
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn database_name(options: &ClientOptions) -> String {
    options
        .default_database
        .clone()
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
}
