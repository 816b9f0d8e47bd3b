mod api;
mod application;
mod domain;
mod infrastructure;
mod ports;

use anyhow::Context;
use api::AppState;
use application::{CheckoutService, ExtensionRegistry};
use infrastructure::extensions;
use infrastructure::{
    InMemoryOrderRepository, MySqlOrderRepository, SbpaymentConfig, SiteConfig, Translator,
};
use ports::{AlterContext, OrderRepositoryPort};
use sqlx::MySqlPool;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting SBPS checkout service...");

    // 站点与 SBPS 配置
    let site = SiteConfig::from_env();
    let sbpayment = Arc::new(SbpaymentConfig::from_env().context("Invalid SBPS configuration")?);
    info!(
        "SBPS configuration loaded for merchant {} / service {}",
        sbpayment.merchant_id, sbpayment.service_id
    );

    // 翻译
    let translator = match &sbpayment.translations_path {
        Some(path) => Translator::from_file(site.default_langcode.as_str(), path)
            .with_context(|| format!("Failed to load translations from {}", path))?,
        None => Translator::new(site.default_langcode.as_str(), Default::default()),
    };
    let ctx = AlterContext::new(site.site_name.as_str(), Arc::new(translator));

    // 扩展注册表（启动时确定，运行期不变）
    let registry = Arc::new(
        extensions::register_builtin(ExtensionRegistry::builder())
            .enabled(sbpayment.extensions.clone())
            .build(),
    );

    // 订单仓储：优先使用数据库，否则使用订单夹具文件
    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        info!("Connecting to database...");
        let pool = MySqlPool::connect(&database_url).await?;
        info!("Database connected successfully");

        let repository = Arc::new(MySqlOrderRepository::new(Arc::new(pool)));
        return serve(repository, registry, sbpayment, ctx).await;
    }

    let fixtures = std::env::var("SBPAYMENT_ORDER_FIXTURES")
        .context("Either DATABASE_URL or SBPAYMENT_ORDER_FIXTURES must be set")?;
    warn!("DATABASE_URL not set, serving orders from {}", fixtures);
    let repository = Arc::new(
        InMemoryOrderRepository::from_file(&fixtures)
            .with_context(|| format!("Failed to load order fixtures from {}", fixtures))?,
    );
    serve(repository, registry, sbpayment, ctx).await
}

async fn serve<R: OrderRepositoryPort + 'static>(
    repository: Arc<R>,
    registry: Arc<ExtensionRegistry>,
    sbpayment: Arc<SbpaymentConfig>,
    ctx: AlterContext,
) -> anyhow::Result<()> {
    // 创建结账服务
    let checkout_service = Arc::new(CheckoutService::new(repository, registry, sbpayment, ctx));

    // 创建路由
    let app = api::create_router(AppState { checkout_service });

    // 启动服务器
    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET  /health - Health check");
    info!("  GET  /api/checkout/payment-methods - Payment method options");
    info!("  POST /api/checkout/orders/:order_id/payment-data - Build SBPS payment data");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
