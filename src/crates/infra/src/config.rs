use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    /// 日志文件路径
    log_file: String,
    /// 服务器配置
    server: RawServerConfig,
    /// 数据库连接池配置
    database: RawDatabaseConfig,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            log_file: "app.log".to_string(),
            server: RawServerConfig::default(),
            database: RawDatabaseConfig::default(),
        }
    }
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 数据库连接池配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDatabaseConfig {
    max_connections: u32,
    min_connections: u32,
    connect_timeout_secs: u64,
    idle_timeout_secs: u64,
    /// 是否输出 sqlx 语句日志
    sqlx_logging: bool,
}

impl Default for RawDatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 3,
            idle_timeout_secs: 60,
            sqlx_logging: false,
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    log_file: String,
    server: ServerConfig,
    database: DatabaseConfig,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let server = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        let database = DatabaseConfig {
            url: data.database_url,
            max_connections: data.database.max_connections,
            min_connections: data.database.min_connections,
            connect_timeout: Duration::from_secs(data.database.connect_timeout_secs),
            idle_timeout: Duration::from_secs(data.database.idle_timeout_secs),
            sqlx_logging: data.database.sqlx_logging,
        };
        AppConfigImpl {
            log_file: data.log_file,
            server,
            database,
        }
    }

    /// 读取 `.env`、可选的 `config.toml` 以及 `APP__` 前缀的环境变量
    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<AppConfigImpl, Box<dyn Error>> {
        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        if raw.database_url.is_empty() {
            return Err("database_url is not configured".into());
        }
        Ok(AppConfigImpl::new(raw))
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone()
    }

    pub fn database_url(&self) -> String {
        self.database.url.clone()
    }

    pub fn log_file(&self) -> String {
        self.log_file.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(content: &str) -> Result<AppConfigImpl, Box<dyn Error>> {
        let config = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;
        AppConfigImpl::from_config(config)
    }

    #[test]
    fn test_defaults() {
        let cfg = from_toml(r#"database_url = "postgres://localhost/olympics""#).unwrap();
        assert_eq!(cfg.database_url(), "postgres://localhost/olympics");
        assert_eq!(cfg.log_file(), "app.log");
        assert_eq!(cfg.server().host, "0.0.0.0");
        assert_eq!(cfg.server().port, 8080);
        let db = cfg.database();
        assert_eq!(db.max_connections, 10);
        assert_eq!(db.connect_timeout, Duration::from_secs(3));
        assert!(!db.sqlx_logging);
    }

    #[test]
    fn test_overrides() {
        let cfg = from_toml(
            r#"
            database_url = "postgres://db/olympics"
            log_file = "/var/log/goldmedal.log"

            [server]
            port = 9000

            [database]
            max_connections = 32
            sqlx_logging = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server().port, 9000);
        assert_eq!(cfg.server().host, "0.0.0.0");
        assert_eq!(cfg.log_file(), "/var/log/goldmedal.log");
        assert_eq!(cfg.database().max_connections, 32);
        assert_eq!(cfg.database().min_connections, 1);
        assert!(cfg.database().sqlx_logging);
    }

    #[test]
    fn test_missing_database_url() {
        assert!(from_toml("log_file = \"x.log\"").is_err());
    }
}
