//! Proto <-> Domain conversions

use chrono::{DateTime, SecondsFormat, Utc};
use shop_common::PagedResult;
use shop_domain_core::Entity;
use shop_errors::{AppError, AppResult};

use crate::domain::entities::{Order, OrderItem};
use crate::proto;

/// 时间戳线上格式：RFC 3339，UTC，秒精度
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 解析 RFC 3339 时间戳（任意偏移量，统一转换为 UTC）
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| AppError::validation(format!("invalid timestamp '{}': {}", s, e)))
}

pub fn item_from_proto(item: proto::OrderItem) -> OrderItem {
    OrderItem {
        product_id: item.product_id,
        product_name: item.product_name,
        quantity: item.quantity,
        price: item.price,
    }
}

pub fn item_to_proto(item: &OrderItem) -> proto::OrderItem {
    proto::OrderItem {
        product_id: item.product_id.clone(),
        product_name: item.product_name.clone(),
        quantity: item.quantity,
        price: item.price,
    }
}

pub fn order_to_proto(order: &Order) -> proto::Order {
    proto::Order {
        id: order.id().to_string(),
        user_id: order.user_id().to_string(),
        items: order.items().iter().map(item_to_proto).collect(),
        total_amount: order.total_amount(),
        status: order.status().as_str().to_string(),
        created_at: format_timestamp(order.created_at()),
        updated_at: format_timestamp(order.updated_at()),
    }
}

fn clamp_i32<T: TryInto<i32>>(value: T) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

pub fn page_to_proto(page: &PagedResult<Order>) -> proto::GetOrdersResponse {
    proto::GetOrdersResponse {
        orders: page.items.iter().map(order_to_proto).collect(),
        total: clamp_i32(page.total),
        page: clamp_i32(page.page),
        limit: clamp_i32(page.page_size),
    }
}
