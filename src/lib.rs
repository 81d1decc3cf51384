pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;

mod db;

pub use db::*;
pub use routes::AppState;
