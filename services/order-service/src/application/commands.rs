//! Order commands

use shop_errors::{AppError, AppResult};

use crate::domain::entities::OrderItem;
use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

/// 要求 ID 非空
pub(crate) fn require_id(id: &str) -> AppResult<OrderId> {
    if id.is_empty() {
        return Err(AppError::validation("id is required"));
    }
    Ok(OrderId::from(id))
}

/// 创建订单命令
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub user_id: String,
    pub items: Vec<OrderItem>,
}

impl CreateOrderCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.user_id.is_empty() {
            return Err(AppError::validation("user_id is required"));
        }
        if self.items.is_empty() {
            return Err(AppError::validation("at least one item is required"));
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }
        Ok(())
    }
}

/// 更新订单状态命令
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusCommand {
    pub order_id: String,
    /// 原始状态文本；为空时不修改
    pub status: String,
}

impl UpdateOrderStatusCommand {
    /// 校验并解析出 (订单 ID, 目标状态)
    pub fn validate(&self) -> AppResult<(OrderId, Option<OrderStatus>)> {
        let order_id = require_id(&self.order_id)?;
        if self.status.trim().is_empty() {
            return Ok((order_id, None));
        }
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok((order_id, Some(status)))
    }
}

/// 删除订单命令
#[derive(Debug, Clone)]
pub struct DeleteOrderCommand {
    pub order_id: String,
}

impl DeleteOrderCommand {
    pub fn validate(&self) -> AppResult<OrderId> {
        require_id(&self.order_id)
    }
}
