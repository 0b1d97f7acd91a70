//! 日志初始化
//!
//! 绑定层本身只发出 `tracing` 事件；宿主程序或测试可以用这里的函数安装一个
//! `fmt` 订阅器。

use crate::config::{LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// 初始化日志系统
///
/// `RUST_LOG` 环境变量优先，否则使用配置中的级别。
/// 重复调用是安全的：全局订阅器已存在时静默跳过。
pub fn init_logging(config: &LoggingConfig) {
    if !config.log_to_console {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    tracing::debug!(target: "foo::bindings", level = ?config.level, "Logging initialized");
}

impl LogLevel {
    /// `EnvFilter` 指令字符串
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(LogLevel::Trace.as_filter(), "trace");
        assert_eq!(LogLevel::Warn.as_filter(), "warn");
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn test_disabled_console_is_noop() {
        let config = LoggingConfig {
            level: LogLevel::Trace,
            log_to_console: false,
        };
        init_logging(&config);
    }
}
