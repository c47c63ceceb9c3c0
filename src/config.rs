use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置 (进程启动时构建一次，之后只读)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub gemini: GeminiConfig,
    pub cors: CorsConfig,
    pub submission: SubmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 上传请求体上限 (字节)
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// 未设置时不限制等待时间
    pub timeout_secs: Option<u64>,
}

// api_key 不进日志
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// 表头与明细是否在同一事务中写入
    pub atomic: bool,
}

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5001,
                max_body_bytes: 20 * 1024 * 1024,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
            },
            gemini: GeminiConfig {
                api_key: None,
                base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
                model: DEFAULT_GEMINI_MODEL.to_string(),
                timeout_secs: None,
            },
            cors: CorsConfig {
                allowed_origin: DEFAULT_CORS_ORIGIN.to_string(),
            },
            submission: SubmissionConfig { atomic: true },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> invoice-capture.toml (可选) -> APP__* 环境变量 -> 常用环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("invoice-capture").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("gemini.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .set_override_option("cors.allowed_origin", std::env::var("CORS_ORIGIN").ok())?
            .build()?
            .try_deserialize()
    }

    /// 只使用默认值构建 (忽略文件与环境变量)
    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.max_body_bytes", defaults.server.max_body_bytes as i64)?
            .set_default("database.url", defaults.database.url)?
            .set_default("gemini.base_url", defaults.gemini.base_url)?
            .set_default("gemini.model", defaults.gemini.model)?
            .set_default("cors.allowed_origin", defaults.cors.allowed_origin)?
            .set_default("submission.atomic", defaults.submission.atomic)
    }
}
