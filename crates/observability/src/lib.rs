//! # Observability
//!
//! 轨迹采样的日志与指标初始化。
//!
//! 负责：
//! - tracing subscriber 初始化（JSON / Pretty / Compact）
//! - 可选 Prometheus exporter
//! - 采样查询与翻转计数（见 [`metrics`]）
//!
//! ## 使用示例
//!
//! ```ignore
//! use observability::{init_with_config, LogFormat, ObservabilityConfig};
//!
//! // 或 ObservabilityConfig::from_env()?
//! init_with_config(ObservabilityConfig {
//!     log_format: LogFormat::Pretty,
//!     ..Default::default()
//! })?;
//! ```

pub mod metrics;

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use crate::metrics::{describe_metrics, record_flip, record_lookup};

/// 日志格式环境变量
pub const LOG_FORMAT_ENV: &str = "TRAJECTORY_LOG_FORMAT";
/// Prometheus 端口环境变量
pub const METRICS_PORT_ENV: &str = "TRAJECTORY_METRICS_PORT";

/// 日志格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON 结构化日志
    #[default]
    Json,
    /// 多行可读格式
    Pretty,
    /// 单行紧凑格式
    Compact,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => bail!("unknown log format '{other}' (expected json, pretty or compact)"),
        }
    }
}

/// Observability 配置
#[derive(Debug, Clone, PartialEq)]
pub struct ObservabilityConfig {
    pub log_format: LogFormat,
    /// Prometheus 端口（None = 不启用）
    pub metrics_port: Option<u16>,
    /// 未设置 RUST_LOG 时的默认过滤级别
    pub default_log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            metrics_port: None,
            default_log_level: "info".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// 从环境变量读取，未设置的项保留默认值
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.log_format = format.parse()?;
        }
        if let Some(port) = lookup(METRICS_PORT_ENV) {
            let port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid {METRICS_PORT_ENV}: '{port}'"))?;
            config.metrics_port = Some(port);
        }
        Ok(config)
    }
}

/// 默认配置初始化（JSON 日志，不启用 exporter）
pub fn init() -> Result<()> {
    init_with_config(ObservabilityConfig::default())
}

/// 按配置初始化 tracing 与可选的 Prometheus exporter
pub fn init_with_config(config: ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config.log_format))
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    if let Some(port) = config.metrics_port {
        init_metrics_only(port)?;
    }

    tracing::info!(
        log_format = ?config.log_format,
        metrics_port = ?config.metrics_port,
        "Observability initialized"
    );
    Ok(())
}

/// 仅安装 Prometheus exporter（tracing 由调用方自行初始化）
pub fn init_metrics_only(port: u16) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .context("Failed to install Prometheus recorder")?;
    describe_metrics();

    tracing::info!(port, "Prometheus metrics endpoint initialized");
    Ok(())
}

fn fmt_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        // 采样查询的 trace span 只在 JSON 中带上文件与行号
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(false).boxed(),
    }
}
