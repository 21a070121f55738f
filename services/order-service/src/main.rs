//! order-service Service - Order Management

use std::sync::Arc;

use order_service::FILE_DESCRIPTOR_SET;
use order_service::api::OrderServiceImpl;
use order_service::application::OrderHandler;
use order_service::domain::repositories::OrderRepository;
use order_service::infrastructure::health::OrderStoreHealthCheck;
use order_service::infrastructure::persistence::InMemoryOrderRepository;
use order_service::infrastructure::seed::seed_demo_orders;
use order_service::proto::order_service_server::OrderServiceServer;
use shop_bootstrap::reflection::build_reflection;
use shop_bootstrap::{Infrastructure, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |infra: Infrastructure, mut server| async move {
        info!("Initializing order-service...");

        let order_repo: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
        if infra.config().seed_demo_data {
            seed_demo_orders(order_repo.as_ref()).await?;
        }
        infra
            .register_health_check(Arc::new(OrderStoreHealthCheck::new(order_repo.clone())))
            .await;
        info!("Order store initialized");

        let handler = Arc::new(OrderHandler::new(order_repo));
        let service = OrderServiceImpl::new(handler);

        let reflection_service = build_reflection(vec![FILE_DESCRIPTOR_SET])?;
        info!("gRPC reflection enabled");

        Ok(server
            .add_service(OrderServiceServer::new(service))
            .add_service(reflection_service))
    })
    .await
}
