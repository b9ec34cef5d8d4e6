use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    server::telemetry::init_tracing();

    let config = server::config::load_config();
    if config.features.telemetry {
        if let Err(e) = server::telemetry::init_telemetry() {
            tracing::warn!("telemetry disabled: {e}");
        }
    }
    server::health::record_start_time();

    let mut router = server::openapi::api_router();

    if config.features.telemetry {
        router = router.layer(server::telemetry::OtelTraceLayer);
    }

    let router = router
        .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
        .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
            tower_http::request_id::MakeRequestUuid,
        ));

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "caseclock listening; API reference at /docs");

    axum::serve(listener, router).await?;
    Ok(())
}
