//! Entry point: load config, connect, synchronize schema, serve.

use axum::Router;
use car_backend::{api_routes, common_routes, connect_pool, sync_schema, AppState, Config};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("car_backend=info".parse()?))
        .init();

    let config = Config::load();

    // Connect failure is fatal; the process exits nonzero.
    let pool = match connect_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "failed to connect to database");
            return Err(e.into());
        }
    };

    if let Err(e) = sync_schema(&pool).await {
        tracing::warn!(error = %e, "schema sync failed; continuing with existing schema");
    }

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
