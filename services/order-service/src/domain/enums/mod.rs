//! 领域枚举

mod order_status;

pub use order_status::*;
