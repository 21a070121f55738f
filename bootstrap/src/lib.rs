//! shop-bootstrap - 统一服务启动骨架
//!
//! 所有服务复用的启动逻辑

pub mod health;
mod infrastructure;
pub mod metrics;
pub mod reflection;
mod runtime;
mod starter;

pub use infrastructure::*;
pub use runtime::*;
pub use starter::*;
