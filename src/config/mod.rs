/// 统一配置系统
///
/// 提供TOML/JSON配置文件加载、保存和验证
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod library;

pub use library::{LibraryConfig, DEFAULT_LIBRARY_NAME};

/// 绑定配置错误
///
/// 加载库时遇到的配置错误会被包装成 `BindingError::Load`。
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置文件无法读取或写入
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// TOML/JSON 文档格式错误，或配置无法序列化
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 库名为空、库名带路径分隔符，或显式路径为空
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 绑定层主配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// 动态库配置
    #[serde(default)]
    pub library: LibraryConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BindingConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 指向显式库路径的配置
    pub fn with_library_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            library: LibraryConfig::with_path(path),
            ..Self::default()
        }
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.library.validate()
    }
}

use crate::impl_default;

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}
