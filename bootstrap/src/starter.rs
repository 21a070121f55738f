//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use shop_config::AppConfig;
use shop_errors::AppResult;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info, warn};

use crate::health::{HealthChecker, HealthServer};
use crate::infrastructure::Infrastructure;
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 gRPC 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 安装 metrics 记录器
/// 4. 启动健康检查 HTTP 服务器
/// 5. 调用用户提供的闭包构建 gRPC 路由
/// 6. 启动服务器并处理 graceful shutdown
///
/// 任何一步失败都直接返回错误，由 `main` 终止进程。
///
/// # 示例
///
/// ```ignore
/// use shop_bootstrap::{Infrastructure, run_server};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |infra: Infrastructure, mut server| async move {
///         Ok(server.add_service(MyServiceServer::new(MyServiceImpl::default())))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = match MetricsRecorder::install() {
        Ok(recorder) => Some(Arc::new(recorder)),
        Err(e) => {
            warn!(error = %e, "Metrics disabled");
            None
        }
    };

    // 4. 启动健康检查 HTTP 服务器
    let health_checker = Arc::new(HealthChecker::new());
    let health_handle = if config.health.enabled {
        let health_server =
            HealthServer::new(health_checker.clone(), metrics, config.health_port());
        Some(tokio::spawn(async move {
            if let Err(e) = health_server.serve().await {
                error!("Health server error: {}", e);
            }
        }))
    } else {
        None
    };

    // 5. 构建服务地址
    let addr: SocketAddr = config.server.address().parse()?;

    // 6. 让服务构建 gRPC 路由
    let infra = Infrastructure::new(config, health_checker);
    let router = router_builder(infra, Server::builder()).await?;

    info!(%addr, "gRPC server starting");

    // 7. 启动服务器
    let result = router.serve_with_shutdown(addr, shutdown_signal()).await;

    // 8. 清理
    if let Some(handle) = health_handle {
        handle.abort();
    }

    result?;

    info!("Service stopped");

    Ok(())
}
