//! 基础设施层

pub mod health;
pub mod persistence;
pub mod seed;
