//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use shop_errors::{AppError, AppResult};

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder，进程内只能调用一次
    pub fn install() -> AppResult<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| AppError::internal(format!("Failed to install Prometheus recorder: {}", e)))?;

        Ok(Self { handle })
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 gRPC 请求
pub fn record_grpc_request(service: &str, method: &str, status: &str, duration_ms: f64) {
    let labels = [
        ("service", service.to_string()),
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];

    counter!("grpc_requests_total", &labels).increment(1);
    histogram!("grpc_request_duration_ms", &labels).record(duration_ms);
}

/// 请求计时器
pub struct RequestTimer {
    start: Instant,
    service: &'static str,
    method: &'static str,
}

impl RequestTimer {
    pub fn new(service: &'static str, method: &'static str) -> Self {
        Self {
            start: Instant::now(),
            service,
            method,
        }
    }

    pub fn finish(self, status: &str) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        record_grpc_request(self.service, self.method, status, duration);
    }

    /// 按调用结果记录
    pub fn observe<T>(self, result: &AppResult<T>) {
        self.finish(outcome_label(result));
    }
}

/// 调用结果标签：成功为 `ok`，失败为错误种类
pub fn outcome_label<T>(result: &AppResult<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    }
}
