//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use shop_common::HealthCheck;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查器
pub struct HealthChecker {
    checks: RwLock<Vec<Arc<dyn HealthCheck>>>,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            checks: RwLock::new(Vec::new()),
        }
    }

    /// 注册组件检查
    pub async fn register(&self, check: Arc<dyn HealthCheck>) {
        info!(component = check.component_name(), "Health check registered");
        self.checks.write().await.push(check);
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 执行就绪检查（readiness）
    pub async fn readiness(&self) -> HealthStatus {
        let checks = self.checks.read().await;
        let mut status = HealthStatus::healthy();

        for check in checks.iter() {
            let result = check.check().await;
            let component = if result.healthy {
                ComponentHealth::healthy(check.component_name(), result.detail)
            } else {
                ComponentHealth::unhealthy(
                    check.component_name(),
                    result.error.unwrap_or_else(|| "unknown error".to_string()),
                )
            };
            status.add_check(component);
        }

        status
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HTTP 健康检查服务器
// ============================================================================

/// HTTP 健康检查服务器状态
#[derive(Clone)]
struct HealthServerState {
    checker: Arc<HealthChecker>,
    metrics: Option<Arc<MetricsRecorder>>,
}

/// HTTP 健康检查服务器
pub struct HealthServer {
    checker: Arc<HealthChecker>,
    metrics: Option<Arc<MetricsRecorder>>,
    port: u16,
}

impl HealthServer {
    /// 创建新的健康检查服务器
    pub fn new(
        checker: Arc<HealthChecker>,
        metrics: Option<Arc<MetricsRecorder>>,
        port: u16,
    ) -> Self {
        Self {
            checker,
            metrics,
            port,
        }
    }

    pub fn router(&self) -> Router {
        let state = HealthServerState {
            checker: self.checker.clone(),
            metrics: self.metrics.clone(),
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(state)
    }

    /// 启动 HTTP 服务器
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let app = self.router();

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(%addr, "Health check HTTP server starting");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await
    }
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    match state.metrics {
        Some(metrics) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            metrics.render(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "text/plain; charset=utf-8")],
            "metrics recorder not installed".to_string(),
        ),
    }
}
