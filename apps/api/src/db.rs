use anyhow::Result;
use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::{error, info};

/// Creates the MongoDB database handle used for the lifetime of the process.
///
/// The connection is verified with a ping, but a failed ping is logged and
/// NOT fatal: the process still serves requests and individual database
/// operations fail on their own.
pub async fn connect(uri: &str, database: &str) -> Result<Database> {
    info!("Connecting to MongoDB at {uri}");

    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => info!("Connected to MongoDB database: {database}"),
        Err(e) => error!("MongoDB connection check failed: {e}"),
    }

    Ok(db)
}
