//! 统一错误处理模块
//!
//! 绑定层只有两类致命错误：
//!
//! - **加载错误** (`Load`): 动态库找不到或无法映射进进程
//! - **符号解析错误** (`SymbolResolution`): 库已加载但缺少声明的符号
//!
//! 两者都不可恢复，直接返回给调用方，不做重试。

use thiserror::Error;

/// 绑定层错误类型
///
/// 实现 `Clone` 是因为进程级句柄会缓存初始化结果，每个调用方都拿到同一个错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// 动态库无法定位或加载
    #[error("Failed to load library {library}: {reason}")]
    Load { library: String, reason: String },

    /// 已加载的库中缺少符号
    #[error("Failed to resolve symbol `{symbol}` in {library}: {reason}")]
    SymbolResolution {
        symbol: String,
        library: String,
        reason: String,
    },
}

/// 绑定层结果类型
pub type BindingResult<T> = Result<T, BindingError>;

impl BindingError {
    /// 构造加载错误
    pub fn load(library: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            library: library.into(),
            reason: reason.to_string(),
        }
    }

    /// 构造符号解析错误
    pub fn symbol_resolution(
        symbol: impl Into<String>,
        library: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::SymbolResolution {
            symbol: symbol.into(),
            library: library.into(),
            reason: reason.to_string(),
        }
    }

    /// 出错的库
    pub fn library(&self) -> &str {
        match self {
            Self::Load { library, .. } | Self::SymbolResolution { library, .. } => library,
        }
    }
}
