//! 仓储接口

mod order_repository;

pub use order_repository::*;
