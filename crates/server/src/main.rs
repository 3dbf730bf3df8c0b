// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod pages;


use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use fyyur_api::FlashQueue;
use fyyur_persistence::Persistence;
use time::UtcOffset;
use tokio::sync::Mutex;
use tracing::info;

/// Fyyur Server - HTTP server for booking venues and artists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Hours east of UTC of the wall clock show times are entered in
    #[arg(
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i8).range(-23..=23)
    )]
    utc_offset: i8,
}

/// Application state shared across handlers.
///
/// Persistence and the flash queue each sit behind a mutex. When both
/// are needed, persistence is locked first.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for venues, artists and shows.
    persistence: Arc<Mutex<Persistence>>,
    /// Messages waiting for the next page render.
    flashes: Arc<Mutex<FlashQueue>>,
    /// Offset of the wall clock that stored show times are in.
    utc_offset: UtcOffset,
}

impl AppState {
    fn new(persistence: Persistence, utc_offset: UtcOffset) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            flashes: Arc::new(Mutex::new(FlashQueue::new())),
            utc_offset,
        }
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_home))
        .route("/venues", get(pages::handle_list_venues))
        .route("/venues/search", post(pages::handle_search_venues))
        .route(
            "/venues/create",
            get(pages::handle_new_venue_form).post(pages::handle_create_venue),
        )
        .route(
            "/venues/{id}",
            get(pages::handle_get_venue).delete(pages::handle_delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(pages::handle_edit_venue_form).post(pages::handle_update_venue),
        )
        .route("/artists", get(pages::handle_list_artists))
        .route("/artists/search", post(pages::handle_search_artists))
        .route(
            "/artists/create",
            get(pages::handle_new_artist_form).post(pages::handle_create_artist),
        )
        .route(
            "/artists/{id}",
            get(pages::handle_get_artist).delete(pages::handle_delete_artist),
        )
        .route(
            "/artists/{id}/edit",
            get(pages::handle_edit_artist_form).post(pages::handle_update_artist),
        )
        .route("/shows", get(pages::handle_list_shows))
        .route(
            "/shows/create",
            get(pages::handle_new_show_form).post(pages::handle_create_show),
        )
        .fallback(pages::handle_not_found)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Fyyur Server");

    let utc_offset: UtcOffset = UtcOffset::from_hms(args.utc_offset, 0, 0)?;
    info!(%utc_offset, "Show times are compared in local wall-clock time");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app: Router = build_router(AppState::new(persistence, utc_offset));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
