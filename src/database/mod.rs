use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection, Database, IndexModel,
};

use crate::models::{Booking, Material, Note, Review, Session, User};
use crate::utils::AppError;

pub const USERS: &str = "users";
pub const SESSIONS: &str = "session";
pub const BOOKINGS: &str = "bookings";
pub const REVIEWS: &str = "reviews";
pub const NOTES: &str = "notes";
pub const MATERIALS: &str = "materials";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Connects, pings the server and makes sure lookup indexes exist.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mongodb = Self::connect_lazy(uri, db_name).await?;

        mongodb.ping().await?;
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Builds the client without touching the server. The driver opens
    /// pooled connections on first use.
    pub async fn connect_lazy(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("learning-hub-server".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { db })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Creates the secondary indexes every list route filters on
    async fn ensure_indexes(&self) -> Result<(), AppError> {
        log::info!("🔧 Creating database indexes...");

        let indexes: [(&str, Document); 7] = [
            (USERS, doc! { "email": 1 }),
            (USERS, doc! { "createdAt": -1 }),
            (SESSIONS, doc! { "tutorEmail": 1, "status": 1 }),
            (BOOKINGS, doc! { "studentEmail": 1 }),
            (REVIEWS, doc! { "sessionId": 1, "createdAt": -1 }),
            (NOTES, doc! { "email": 1 }),
            (MATERIALS, doc! { "sessionId": 1, "tutorEmail": 1 }),
        ];

        for (collection, keys) in indexes {
            let description = format!("{}({:?})", collection, keys.keys().collect::<Vec<_>>());
            let model = IndexModel::builder().keys(keys).build();

            match self.collection::<Document>(collection).create_index(model).await {
                Ok(_) => log::info!("   ✅ Index created: {}", description),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn users(&self) -> Collection<User> {
        self.collection(USERS)
    }

    pub fn sessions(&self) -> Collection<Session> {
        self.collection(SESSIONS)
    }

    pub fn bookings(&self) -> Collection<Booking> {
        self.collection(BOOKINGS)
    }

    pub fn reviews(&self) -> Collection<Review> {
        self.collection(REVIEWS)
    }

    pub fn notes(&self) -> Collection<Note> {
        self.collection(NOTES)
    }

    pub fn materials(&self) -> Collection<Material> {
        self.collection(MATERIALS)
    }
}

#[cfg(test)]
pub mod test_support {
    use super::MongoDB;

    /// Handle for tests that never reach the server.
    pub async fn offline_db() -> MongoDB {
        MongoDB::connect_lazy("mongodb://127.0.0.1:27017", "learning-hub-test")
            .await
            .expect("lazy client")
    }

    /// Handle against a live server, from `TEST_MONGO_URI` or localhost.
    /// Each call gets its own database so tests do not see each other's data.
    pub async fn live_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("TEST_MONGO_URI")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
        let name = format!("learning-hub-test-{}", mongodb::bson::oid::ObjectId::new().to_hex());

        MongoDB::new(&uri, &name).await.expect("Failed to connect to MongoDB")
    }

    pub async fn drop_db(mongodb: &MongoDB) {
        mongodb.db.drop().await.ok();
    }
}
