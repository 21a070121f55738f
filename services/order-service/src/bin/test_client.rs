//! 订单服务冒烟测试客户端
//!
//! 用法：`order-test-client [endpoint]`，默认连接 `http://127.0.0.1:5003`

use std::time::Duration;

use order_service::api::conversions::parse_timestamp;
use order_service::proto::order_service_client::OrderServiceClient;
use order_service::proto::{GetOrderRequest, GetOrdersRequest};
use shop_telemetry::init_tracing;
use tonic::transport::Endpoint;
use tracing::info;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5003";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let channel = Endpoint::from_shared(endpoint.clone())?
        .timeout(Duration::from_secs(10))
        .connect()
        .await?;
    let mut client = OrderServiceClient::new(channel);
    info!(%endpoint, "Connected");

    info!("Testing GetOrders...");
    let orders = client
        .get_orders(GetOrdersRequest {
            page: 1,
            limit: 10,
            user_id: String::new(),
        })
        .await?
        .into_inner();

    info!(count = orders.orders.len(), total = orders.total, "Orders found");
    for order in &orders.orders {
        info!(
            id = %order.id,
            user_id = %order.user_id,
            status = %order.status,
            total_amount = order.total_amount,
            "Order"
        );
    }

    if let Some(first) = orders.orders.first() {
        info!(id = %first.id, "Testing GetOrder...");

        let order = client
            .get_order(GetOrderRequest {
                id: first.id.clone(),
            })
            .await?
            .into_inner()
            .order
            .ok_or("GetOrder returned an empty order")?;

        let created_at = parse_timestamp(&order.created_at)?;
        info!(
            id = %order.id,
            user_id = %order.user_id,
            status = %order.status,
            items = order.items.len(),
            %created_at,
            "Order details"
        );

        for (i, item) in order.items.iter().enumerate() {
            info!(
                "  Item {}: {} x{} = ${:.2}",
                i + 1,
                item.product_name,
                item.quantity,
                item.price
            );
        }
    }

    info!("Order service smoke test completed successfully");
    Ok(())
}
