use mongodb::{Client, Collection, Database};
use std::error::Error;

pub const USERS: &str = "users";
pub const SUBSCRIPTIONS: &str = "subscriptions";
pub const APPOINTMENTS: &str = "appointments";
pub const DIET_PLANS: &str = "dietPlans";
pub const CHAT_HISTORY: &str = "chatHistory";

#[derive(Clone)]
pub struct MongoDb {
    db: Database,
}

impl MongoDb {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("fitlife");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates non-unique lookup indexes for the pre-insert email checks.
    /// Uniqueness of subscription emails is enforced in the service layer,
    /// not by the index.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.database().collection::<mongodb::bson::Document>(USERS);

        let users_index = IndexModel::builder().keys(doc! { "email": 1 }).build();

        match users.create_index(users_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        let subscriptions = self
            .database()
            .collection::<mongodb::bson::Document>(SUBSCRIPTIONS);

        let subscriptions_index = IndexModel::builder().keys(doc! { "email": 1 }).build();

        match subscriptions.create_index(subscriptions_index).await {
            Ok(_) => log::info!("   ✅ Index created: subscriptions(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
