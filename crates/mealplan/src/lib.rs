mod command;
mod generate;
mod query;
mod types;

pub use command::*;
pub use generate::*;
pub use query::*;
pub use types::*;
