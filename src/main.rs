//! polymark server - HTTP backend for polygon annotation previews
//!
//! This binary serves the coordinate-validation API together with the static
//! frontend used to place polygon points on an uploaded image.

use polymark::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env overrides, then configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::load()?;

    // Start server
    polymark::start_server(config).await?;

    Ok(())
}
