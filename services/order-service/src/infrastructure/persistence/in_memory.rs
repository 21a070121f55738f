//! 内存订单仓储
//!
//! 单个读写锁保护整个映射：写操作持有写锁，读操作持有读锁，锁覆盖整个调用。

use std::collections::HashMap;

use async_trait::async_trait;
use shop_common::{PagedResult, Pagination};
use shop_domain_core::Entity;
use shop_errors::AppResult;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Order;
use crate::domain::enums::OrderStatus;
use crate::domain::repositories::{OrderFilter, OrderRepository};
use crate::domain::value_objects::OrderId;

/// 内存订单仓储
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    /// 创建空仓储；演示数据由 [`crate::infrastructure::seed`] 显式写入
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: Order) -> AppResult<()> {
        let mut orders = self.orders.write().await;
        debug!(order_id = %order.id(), "Inserting order");
        orders.insert(order.id().clone(), order);
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(id).cloned())
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: Option<OrderStatus>,
    ) -> AppResult<Option<Order>> {
        let mut orders = self.orders.write().await;
        Ok(orders.get_mut(id).map(|order| {
            order.change_status(status);
            order.clone()
        }))
    }

    async fn delete(&self, id: &OrderId) -> AppResult<bool> {
        let mut orders = self.orders.write().await;
        Ok(orders.remove(id).is_some())
    }

    async fn list(
        &self,
        filter: &OrderFilter,
        pagination: Pagination,
    ) -> AppResult<PagedResult<Order>> {
        let orders = self.orders.read().await;

        let mut candidates: Vec<&Order> =
            orders.values().filter(|order| filter.matches(order)).collect();
        candidates.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        let total = candidates.len() as u64;
        let page = pagination
            .slice(&candidates)
            .iter()
            .map(|order| (*order).clone())
            .collect();

        Ok(PagedResult::new(page, total, &pagination))
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.orders.read().await.len())
    }
}
