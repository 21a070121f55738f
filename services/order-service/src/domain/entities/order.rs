//! 订单聚合根

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_domain_core::{AggregateRoot, AuditInfo, Entity};

use crate::domain::enums::OrderStatus;
use crate::domain::value_objects::OrderId;

use super::OrderItem;

/// 订单聚合根
///
/// 总金额在创建时由订单行计算，之后不可单独修改；
/// 创建后唯一可变的是状态（同时刷新更新时间）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: String,
    items: Vec<OrderItem>,
    total_amount: f64,
    status: OrderStatus,
    audit_info: AuditInfo,
}

impl Order {
    /// 下单：生成新 ID，计算总金额，状态置为 pending
    pub fn place(user_id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self::restore(
            OrderId::generate(),
            user_id,
            items,
            OrderStatus::Pending,
            AuditInfo::new(),
        )
    }

    /// 以指定 ID、状态和时间戳重建订单（用于演示数据等场景），总金额仍由订单行计算
    pub fn restore(
        id: OrderId,
        user_id: impl Into<String>,
        items: Vec<OrderItem>,
        status: OrderStatus,
        audit_info: AuditInfo,
    ) -> Self {
        let total_amount = Self::compute_total(&items);
        Self {
            id,
            user_id: user_id.into(),
            items,
            total_amount,
            status,
            audit_info,
        }
    }

    pub fn compute_total(items: &[OrderItem]) -> f64 {
        items.iter().map(OrderItem::line_total).sum()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.audit_info.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.audit_info.updated_at
    }

    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// 修改状态；`None` 表示不修改，订单保持原样（包括更新时间）
    pub fn change_status(&mut self, status: Option<OrderStatus>) {
        if let Some(status) = status {
            self.status = status;
            self.audit_info.touch();
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}
