use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gate_server::network::hstc_network;
use gate_server::transport::TransportPlanner;
use gate_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Reference data is seeded at startup; the graph never changes while
    // the server runs.
    let network = hstc_network();
    info!(
        gates = network.gate_count(),
        routes = network.route_count(),
        "loaded HSTC gate network"
    );

    let planner = TransportPlanner::default();
    let state = AppState::new(network, planner);

    let app = create_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    println!("Gate routing server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                      - Health check");
    println!("  GET /gates                       - List gates");
    println!("  GET /gates/:code                 - Gate detail with outgoing routes");
    println!("  GET /gates/:code/to/:target      - Cheapest path between gates");
    println!("  GET /transport/:distance         - Transport pricing");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
