use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use std::time::Duration;

/// 连接管理器: 持有解析后的连接参数，不做连接池
#[derive(Debug, Clone)]
pub struct ConnectionManager {
    options: SqliteConnectOptions,
}

impl ConnectionManager {
    pub fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            // 设置慢查询日志阈值为 5秒
            .log_slow_statements(tracing::log::LevelFilter::Warn, Duration::from_secs(5));

        Ok(Self { options })
    }

    /// 为一次请求 (或一条命令) 创建作用域，连接在首次使用时才打开
    pub fn scope(&self) -> ConnectionScope {
        ConnectionScope {
            options: self.options.clone(),
            conn: None,
        }
    }
}

/// 请求作用域内的数据库连接
///
/// 同一作用域内最多一个连接；`close` 为显式收尾，
/// 提前返回或出错时 drop 也会释放连接。
pub struct ConnectionScope {
    options: SqliteConnectOptions,
    conn: Option<SqliteConnection>,
}

impl ConnectionScope {
    /// 获取当前连接，首次调用时建立
    pub async fn get(&mut self) -> Result<&mut SqliteConnection, sqlx::Error> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                tracing::debug!("Opening database connection");
                self.options.connect().await?
            }
        };
        Ok(self.conn.insert(conn))
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// 关闭作用域内已打开的连接
    pub async fn close(mut self) -> Result<(), sqlx::Error> {
        if let Some(conn) = self.conn.take() {
            conn.close().await?;
            tracing::debug!("Database connection closed");
        }
        Ok(())
    }
}
