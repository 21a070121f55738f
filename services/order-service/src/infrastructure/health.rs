//! 订单存储健康检查

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use shop_common::{BaseHealthResult, HealthCheck};

use crate::domain::repositories::OrderRepository;

/// 订单存储 readiness 探针，附带当前订单数
pub struct OrderStoreHealthCheck {
    repo: Arc<dyn OrderRepository>,
}

impl OrderStoreHealthCheck {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl HealthCheck for OrderStoreHealthCheck {
    async fn check(&self) -> BaseHealthResult {
        let start = Instant::now();
        match self.repo.count().await {
            Ok(count) => BaseHealthResult::healthy_since(start).with_detail(format!("{} orders", count)),
            Err(e) => BaseHealthResult::unhealthy(e.to_string()),
        }
    }

    fn component_name(&self) -> &'static str {
        "order_store"
    }
}
