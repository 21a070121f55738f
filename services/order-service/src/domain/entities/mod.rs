//! 领域实体

mod order;
mod order_item;

pub use order::*;
pub use order_item::*;
