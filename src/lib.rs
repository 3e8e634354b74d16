//! Car backend: a small REST service for cars and users over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use models::{Car, NewCar, User};
pub use routes::{api_routes, common_routes};
pub use service::{CarService, UserService};
pub use state::AppState;
pub use store::{connect_pool, sync_schema};
