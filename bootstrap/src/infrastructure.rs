//! 基础设施资源管理
//!
//! 启动器交给服务构建闭包的资源容器

use std::sync::Arc;

use shop_common::HealthCheck;
use shop_config::AppConfig;

use crate::health::HealthChecker;

/// 基础设施资源容器
#[derive(Clone)]
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// 健康检查器（readiness 探针注册处）
    health: Arc<HealthChecker>,
}

impl Infrastructure {
    pub fn new(config: AppConfig, health: Arc<HealthChecker>) -> Self {
        Self { config, health }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 注册参与 readiness 检查的组件
    pub async fn register_health_check(&self, check: Arc<dyn HealthCheck>) {
        self.health.register(check).await;
    }
}
