//! 绑定层
//!
//! 定位并加载 libfoo，声明 `square` 的调用约定，并把它暴露成普通的 Rust 函数。
//!
//! 有两种使用方式：
//!
//! - 进程级句柄：[`load`] / [`load_with`] 只初始化一次，之后在整个进程内共享
//! - 显式句柄：[`NativeLibrary::open`] 返回一个独立句柄，可以 [`NativeLibrary::close`]

pub mod descriptor;
pub mod library;

pub use descriptor::{CallDescriptor, FfiType, SQUARE};
pub use library::{NativeLibrary, SquareFn};

use crate::config::BindingConfig;
use crate::core::BindingResult;
use std::os::raw::c_int;
use std::sync::OnceLock;

/// 进程级库句柄，初始化结果（包括失败）会被缓存
static LIBRARY: OnceLock<BindingResult<NativeLibrary>> = OnceLock::new();

/// 绑定状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// 尚未加载，或加载失败
    Unloaded,
    /// 已加载，持续到进程退出
    Loaded,
}

/// 使用默认配置加载进程级句柄
///
/// 幂等：重复调用返回同一个句柄（或同一个错误）。
pub fn load() -> BindingResult<&'static NativeLibrary> {
    load_with(&BindingConfig::default())
}

/// 使用给定配置加载进程级句柄
///
/// 只有第一次初始化会用到 `config`，之后的调用直接返回缓存的结果。
pub fn load_with(config: &BindingConfig) -> BindingResult<&'static NativeLibrary> {
    LIBRARY
        .get_or_init(|| NativeLibrary::open(config))
        .as_ref()
        .map_err(Clone::clone)
}

/// 当前绑定状态
pub fn state() -> BindingState {
    match LIBRARY.get() {
        Some(Ok(_)) => BindingState::Loaded,
        _ => BindingState::Unloaded,
    }
}

pub fn is_loaded() -> bool {
    state() == BindingState::Loaded
}

/// 计算 `value` 的平方
///
/// 首次调用时加载库；加载失败的错误原样返回。
/// 不做范围检查，超出 `c_int` 的结果按原生实现回绕。
pub fn square(value: c_int) -> BindingResult<c_int> {
    Ok(load()?.square(value))
}
