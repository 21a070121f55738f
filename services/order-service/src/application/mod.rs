//! Application layer

pub mod commands;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use handler::OrderHandler;
pub use queries::*;
