pub mod migrate;
pub mod plan;
pub mod server;
