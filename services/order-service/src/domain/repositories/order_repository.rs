//! 订单仓储接口

use async_trait::async_trait;
use shop_common::{PagedResult, Pagination};
use shop_errors::AppResult;

use crate::domain::entities::Order;
use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

/// 订单列表过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// 仅返回该用户的订单；`None` 表示不过滤
    pub user_id: Option<String>,
}

impl OrderFilter {
    /// 空字符串视为不过滤
    pub fn by_user(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self {
            user_id: if user_id.is_empty() { None } else { Some(user_id) },
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.user_id
            .as_deref()
            .is_none_or(|user_id| order.belongs_to(user_id))
    }
}

/// 订单仓储接口
///
/// 每个方法都是一次原子操作；不提供跨调用的事务
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 保存新订单，调用方保证 ID 唯一
    async fn insert(&self, order: Order) -> AppResult<()>;

    /// 根据 ID 查找订单
    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>>;

    /// 修改状态并返回修改后的订单；订单不存在时返回 `None`
    async fn update_status(
        &self,
        id: &OrderId,
        status: Option<OrderStatus>,
    ) -> AppResult<Option<Order>>;

    /// 删除订单；返回是否确实删除了记录
    async fn delete(&self, id: &OrderId) -> AppResult<bool>;

    /// 列表查询：按创建时间、ID 排序后分页，`total` 为过滤后的总数
    async fn list(&self, filter: &OrderFilter, pagination: Pagination)
    -> AppResult<PagedResult<Order>>;

    /// 订单总数
    async fn count(&self) -> AppResult<usize>;
}
