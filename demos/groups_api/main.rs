//! Groups API example with seeded demo data
//!
//! Run with:
//!
//! ```bash
//! cargo run --example groups_api
//! ROLLCALL_CONFIG=path/to/config.yaml cargo run --example groups_api
//! ```

use anyhow::Result;
use rollcall::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/groups_api/config.yaml");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rollcall=debug")),
        )
        .init();

    let path = std::env::var("ROLLCALL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let config = AppConfig::from_yaml_file(&path)?;
    tracing::info!(config = %path, "configuration loaded");

    let service: Arc<dyn GroupService> = Arc::new(InMemoryGroupService::new());
    let seeded = seed_demo_data(service.as_ref(), &config.seed).await?;
    tracing::info!(groups = seeded, "demo data seeded");

    let base = config.server.base_path.clone();
    println!("🚀 Rollcall Groups API on http://{}{}", config.server.address(), base);
    println!("📖 Available endpoints:");
    println!("   GET    {base}/groups?page=1&limit=10&filter=name::lo.*&sort=-id");
    println!("   POST   {base}/groups");
    println!("   GET    {base}/groups/{{id}}");
    println!("   PUT    {base}/groups/{{id}}");
    println!("   DELETE {base}/groups/{{id}}");
    println!("   GET    {base}/groups/{{id}}/members?filter=name::a.*&sort=name");
    println!("   POST   {base}/groups/{{id}}/members");
    println!("   GET    {base}/groups/{{id}}/members/{{member_id}}");
    println!("   PUT    {base}/groups/{{id}}/members/{{member_id}}");
    println!("   DELETE {base}/groups/{{id}}/members/{{member_id}}");
    println!("   GET    /health\n");

    ServerBuilder::new()
        .with_config(config)
        .with_shared_service(service)
        .serve()
        .await
}
