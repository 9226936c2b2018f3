use std::sync::Arc;

use config::Config;
use database::Database;

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod utils;

pub use router::create_router;

/// Per-process context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub config: Config,
}

impl AppState {
    pub fn new(db: Arc<dyn Database>, config: Config) -> Self {
        Self { db, config }
    }
}
