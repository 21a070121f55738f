//! Order queries

use shop_common::Pagination;
use shop_errors::AppResult;

use crate::domain::repositories::OrderFilter;
use crate::domain::value_objects::OrderId;

use super::commands::require_id;

/// 获取订单查询
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: String,
}

impl GetOrderQuery {
    pub fn validate(&self) -> AppResult<OrderId> {
        require_id(&self.order_id)
    }
}

/// 列表订单查询
#[derive(Debug, Clone)]
pub struct ListOrdersQuery {
    pub filter: OrderFilter,
    pub pagination: Pagination,
}

impl ListOrdersQuery {
    /// 从原始请求参数构造，分页参数在此归一化
    pub fn new(user_id: impl Into<String>, page: i32, limit: i32) -> Self {
        Self {
            filter: OrderFilter::by_user(user_id),
            pagination: Pagination::normalized(page, limit),
        }
    }
}
