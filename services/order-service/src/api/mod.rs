//! API layer - gRPC service implementations

pub mod conversions;
mod grpc_service;

pub use grpc_service::OrderServiceImpl;
