pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;

use std::sync::Arc;

pub use config::Config;
pub use error::{AppError, AppResult};
use store::BookingStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookingStore>,
    pub config: Config,
}
