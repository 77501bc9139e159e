use std::net::SocketAddr;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use transit_server::sim::{Fleet, LiveFleet, SimConfig, seed_fleet, spawn_simulator};
use transit_server::timetable::amravati_network;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the static network
    let timetable = amravati_network();
    println!(
        "Loaded timetable: {} stops, {} routes",
        timetable.stops().len(),
        timetable.routes().len()
    );

    // Seed the live fleet and start the position simulator. The handle
    // must stay alive for the lifetime of the server; dropping it
    // cancels the tick timer.
    let sim_config = SimConfig::default();
    let fleet = LiveFleet::new(Fleet::new(seed_fleet(Utc::now())));
    let _simulator = spawn_simulator(fleet.clone(), sim_config.clone());

    // Build app state
    let state = AppState::new(timetable, fleet, sim_config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health           - Health check");
    println!("  GET  /api/stops        - Stop directory");
    println!("  GET  /api/suggest      - Type-ahead search");
    println!("  GET  /api/routes       - Route directory");
    println!("  GET  /api/routes/find  - Directional route finder");
    println!("  GET  /api/map          - Map data (stops, paths, vehicles)");
    println!("  GET  /api/vehicles     - Live vehicle snapshots");
    println!("  GET  /api/stats        - Network stats");
    println!("  POST /api/assistant    - Free-text departure assistant");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
