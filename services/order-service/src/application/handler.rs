//! Business logic handler

use std::sync::Arc;

use shop_common::PagedResult;
use shop_domain_core::Entity;
use shop_errors::{AppError, AppResult};
use tracing::{debug, info, warn};

use crate::domain::entities::Order;
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

use super::commands::*;
use super::queries::*;

pub const ORDER_NOT_FOUND: &str = "order not found";
pub const ORDER_DELETED: &str = "Order deleted successfully";

/// 删除结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

/// 订单业务处理器
///
/// 仓储通过构造函数注入，不持有任何全局状态
pub struct OrderHandler {
    order_repo: Arc<dyn OrderRepository>,
}

impl OrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    fn not_found(order_id: &OrderId) -> AppError {
        warn!(order_id = %order_id, "Order not found");
        AppError::not_found(ORDER_NOT_FOUND)
    }

    /// 创建订单
    pub async fn create_order(&self, cmd: CreateOrderCommand) -> AppResult<Order> {
        cmd.validate()?;

        let order = Order::place(cmd.user_id, cmd.items);
        self.order_repo.insert(order.clone()).await?;

        info!(
            order_id = %order.id(),
            user_id = %order.user_id(),
            items = order.items().len(),
            total_amount = order.total_amount(),
            "Order created"
        );
        Ok(order)
    }

    /// 获取订单
    pub async fn get_order(&self, query: GetOrderQuery) -> AppResult<Order> {
        let order_id = query.validate()?;
        debug!(order_id = %order_id, "Getting order");

        self.order_repo
            .find_by_id(&order_id)
            .await?
            .ok_or_else(|| Self::not_found(&order_id))
    }

    /// 更新订单状态；状态为空时原样返回订单
    pub async fn update_order_status(&self, cmd: UpdateOrderStatusCommand) -> AppResult<Order> {
        let (order_id, status) = cmd.validate()?;

        let order = self
            .order_repo
            .update_status(&order_id, status)
            .await?
            .ok_or_else(|| Self::not_found(&order_id))?;

        match status {
            Some(status) => info!(order_id = %order_id, status = %status, "Order status updated"),
            None => debug!(order_id = %order_id, "Empty status, order left unchanged"),
        }
        Ok(order)
    }

    /// 删除订单
    pub async fn delete_order(&self, cmd: DeleteOrderCommand) -> AppResult<DeleteOutcome> {
        let order_id = cmd.validate()?;

        if !self.order_repo.delete(&order_id).await? {
            return Err(Self::not_found(&order_id));
        }

        info!(order_id = %order_id, "Order deleted");
        Ok(DeleteOutcome {
            success: true,
            message: ORDER_DELETED.to_string(),
        })
    }

    /// 列表查询订单
    pub async fn list_orders(&self, query: ListOrdersQuery) -> AppResult<PagedResult<Order>> {
        debug!(
            user_id = ?query.filter.user_id,
            page = query.pagination.page,
            limit = query.pagination.page_size,
            "Listing orders"
        );

        self.order_repo
            .list(&query.filter, query.pagination)
            .await
    }
}
