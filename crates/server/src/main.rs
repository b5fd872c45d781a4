mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use railmap::{
    catalog::Catalog,
    dataset::{Config, Dataset},
    proximity::BandSet,
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing data directory");
        std::process::exit(1);
    }
    let path = std::path::Path::new(&args[1]).canonicalize().unwrap();

    info!("Loading data...");
    let now = Instant::now();
    let dataset = Dataset::new(Config::default()).from_dir(path);
    let catalog = Catalog::new().with_dataset(dataset).unwrap();
    info!(
        "Loaded {} stations and {} lines in {:?}",
        catalog.stations().len(),
        catalog.lines().len(),
        now.elapsed()
    );
    let state = Arc::new(AppState::new(catalog, BandSet::default()));

    let app = axum::Router::new()
        .route("/search", get(api::search))
        .route("/near", get(api::near))
        .route("/station", get(api::station))
        .route("/line", get(api::line))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
