use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use library_api::user_data::{self, UserDataConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = UserDataConfig::from_env();
    let pool = config.build_pool()?;

    let routes = user_data::configure_routes(pool);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3031".to_string())
        .parse()?;

    tracing::info!(%addr, "starting user-data service");
    warp::serve(routes).run(addr).await;

    Ok(())
}
