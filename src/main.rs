use clap::{Parser, Subcommand};
use invoice_capture::llm::{ExtractionPrompt, GeminiClient};
use invoice_capture::{api, init_db, AppConfig, ConnectionManager, ExtractionService, SubmissionService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;

#[derive(Parser)]
#[command(name = "invoice-capture", about = "Invoice image extraction and capture service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 启动 HTTP 服务 (默认)
    Serve,
    /// 创建数据表后退出
    InitDb,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Loaded config: {:?}", config);

    let connections = ConnectionManager::new(&config.database.url)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::InitDb => Ok(init_db(&connections).await?),
        Command::Serve => serve(config, connections).await,
    }
}

async fn serve(
    config: AppConfig,
    connections: ConnectionManager,
) -> Result<(), Box<dyn std::error::Error>> {
    // 每次启动都确保表存在
    init_db(&connections).await?;

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set, /upload requests will fail");
    }

    let model = Arc::new(GeminiClient::new(&config.gemini)?);
    let extraction = Arc::new(ExtractionService::new(model, ExtractionPrompt::default()));
    let submission = Arc::new(SubmissionService::new(connections, config.submission.atomic));

    let app = api::create_router(
        extraction,
        submission,
        &config.cors.allowed_origin,
        config.server.max_body_bytes,
    )?;

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /upload  - extract invoice fields from an image");
    info!("  POST /submit  - store reviewed invoice headers and details");
    info!("  GET  /health  - health check");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
