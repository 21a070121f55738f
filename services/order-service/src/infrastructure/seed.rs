//! 演示数据
//!
//! 仅由本地调试入口（`seed_demo_data = true`）和测试调用，生产构造路径不会写入

use chrono::{Duration, Utc};
use shop_domain_core::AuditInfo;
use shop_errors::AppResult;
use tracing::info;

use crate::domain::entities::{Order, OrderItem};
use crate::domain::enums::OrderStatus;
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

/// 构造三条演示订单：用户 "1" 两条，用户 "2" 一条
pub fn demo_orders() -> Vec<Order> {
    let now = Utc::now();

    vec![
        Order::restore(
            OrderId::from("1"),
            "1",
            vec![
                OrderItem::new("1", "Laptop", 1, 999.99),
                OrderItem::new("3", "Coffee Mug", 2, 12.99),
            ],
            OrderStatus::Confirmed,
            AuditInfo::at(now - Duration::hours(24), now - Duration::hours(24)),
        ),
        Order::restore(
            OrderId::from("2"),
            "2",
            vec![OrderItem::new("2", "Smartphone", 1, 699.99)],
            OrderStatus::Shipped,
            AuditInfo::at(now - Duration::hours(12), now - Duration::hours(6)),
        ),
        Order::restore(
            OrderId::from("3"),
            "1",
            vec![OrderItem::new("3", "Coffee Mug", 5, 12.99)],
            OrderStatus::Pending,
            AuditInfo::at(now - Duration::hours(2), now - Duration::hours(2)),
        ),
    ]
}

/// 写入演示订单
pub async fn seed_demo_orders(repo: &dyn OrderRepository) -> AppResult<usize> {
    let orders = demo_orders();
    let count = orders.len();
    for order in orders {
        repo.insert(order).await?;
    }

    info!(count, "Demo orders seeded");
    Ok(count)
}
