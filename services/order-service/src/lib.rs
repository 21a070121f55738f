//! order-service - 订单管理 gRPC 服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// Proto generated code modules
pub mod order {
    pub mod v1 {
        tonic::include_proto!("order.v1");
    }
}

// Re-export for convenience
pub use order::v1 as proto;

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("order_descriptor");
