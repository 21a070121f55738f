//! 通用健康检查模块
//!
//! 提供组件健康检查的通用 trait 和基础类型

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 基础健康检查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseHealthResult {
    /// 是否健康
    pub healthy: bool,
    /// 延迟（毫秒）
    pub latency_ms: Option<u64>,
    /// 附加信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BaseHealthResult {
    /// 创建健康结果
    pub fn healthy(latency_ms: u64) -> Self {
        Self {
            healthy: true,
            latency_ms: Some(latency_ms),
            detail: None,
            error: None,
        }
    }

    /// 创建不健康结果
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            latency_ms: None,
            detail: None,
            error: Some(error.into()),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 从起始时间计算延迟并创建健康结果
    pub fn healthy_since(start: Instant) -> Self {
        Self::healthy(start.elapsed().as_millis() as u64)
    }
}

/// 健康检查 trait
///
/// 每个需要参与 readiness 检查的组件实现此 trait
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// 执行健康检查
    async fn check(&self) -> BaseHealthResult;

    /// 获取组件名称
    fn component_name(&self) -> &'static str;

    /// 快速健康检查（仅检查是否可用）
    async fn quick_check(&self) -> bool {
        self.check().await.healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysUp;

    #[async_trait]
    impl HealthCheck for AlwaysUp {
        async fn check(&self) -> BaseHealthResult {
            BaseHealthResult::healthy(0).with_detail("ok")
        }

        fn component_name(&self) -> &'static str {
            "always-up"
        }
    }

    #[tokio::test]
    async fn test_quick_check_uses_check_result() {
        let probe = AlwaysUp;
        assert!(probe.quick_check().await);
        assert_eq!(probe.check().await.detail.as_deref(), Some("ok"));
    }

    #[test]
    fn test_unhealthy_result_carries_error() {
        let result = BaseHealthResult::unhealthy("boom");
        assert!(!result.healthy);
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert!(result.latency_ms.is_none());
    }
}
