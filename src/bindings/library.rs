//! 动态库句柄
//!
//! 打开 libfoo、按调用描述符解析符号，并持有库直到显式关闭或被丢弃。

use libloading::{Library, Symbol};
use std::os::raw::c_int;
use std::path::{Path, PathBuf};

use super::descriptor::{CallDescriptor, FfiType, SQUARE};
use crate::config::BindingConfig;
use crate::core::{BindingError, BindingResult};

/// `int (*)(int)` 函数指针
pub type SquareFn = unsafe extern "C" fn(c_int) -> c_int;

/// 已加载的原生库
///
/// 函数指针与 `library` 同生命周期：库只会在 `close` 或 drop 时卸载，
/// 而这两者都会消耗整个句柄。
#[derive(Debug)]
pub struct NativeLibrary {
    /// 库句柄
    library: Library,
    /// 已解析的符号
    function: SquareFn,
    /// 调用描述符
    descriptor: CallDescriptor,
    /// 实际加载的位置
    path: PathBuf,
}

impl NativeLibrary {
    /// 按配置打开库并解析 `square`
    pub fn open(config: &BindingConfig) -> BindingResult<Self> {
        Self::open_with_descriptor(config, SQUARE)
    }

    /// 按配置打开库，解析 `descriptor` 指定的 `int (int)` 符号
    pub fn open_with_descriptor(
        config: &BindingConfig,
        descriptor: CallDescriptor,
    ) -> BindingResult<Self> {
        let library_config = &config.library;

        if let Err(e) = library_config.validate() {
            tracing::warn!(target: "foo::bindings", error = %e, "Invalid library configuration");
            return Err(BindingError::load(library_config.name.clone(), e));
        }

        let int_to_int = descriptor.arity() == 1
            && descriptor.args[0] == FfiType::Int
            && descriptor.ret == FfiType::Int;
        if !int_to_int {
            return Err(BindingError::symbol_resolution(
                descriptor.symbol,
                library_config.name.clone(),
                format!("unsupported signature `{}`", descriptor),
            ));
        }

        let mut failures: Vec<(PathBuf, libloading::Error)> = Vec::new();
        for candidate in library_config.candidates() {
            tracing::debug!(
                target: "foo::bindings",
                path = %candidate.display(),
                "Trying library candidate"
            );

            // 加载会执行库的初始化代码，libfoo 被视为可信
            match unsafe { Library::new(&candidate) } {
                Ok(library) => return Self::bind(library, candidate, descriptor),
                Err(e) => {
                    tracing::warn!(
                        target: "foo::bindings",
                        path = %candidate.display(),
                        error = %e,
                        "Library candidate failed to load"
                    );
                    // 文件存在却加载失败时不再回退到后续位置
                    let present = is_on_disk(&candidate);
                    failures.push((candidate, e));
                    if present {
                        break;
                    }
                }
            }
        }

        let error = load_failure(&library_config.name, &failures);
        tracing::warn!(target: "foo::bindings", error = %error, "Failed to load native library");
        Err(error)
    }

    /// 在已加载的库中解析符号；缺失时立即失败，而不是推迟到首次调用
    fn bind(library: Library, path: PathBuf, descriptor: CallDescriptor) -> BindingResult<Self> {
        let resolved = {
            let symbol: Result<Symbol<SquareFn>, _> =
                unsafe { library.get(&descriptor.symbol_bytes()) };
            symbol.map(|symbol| *symbol)
        };

        let function = match resolved {
            Ok(function) => function,
            Err(e) => {
                let error = BindingError::symbol_resolution(
                    descriptor.symbol,
                    path.display().to_string(),
                    e,
                );
                tracing::warn!(target: "foo::bindings", error = %error, "Failed to resolve symbol");
                return Err(error);
            }
        };

        tracing::info!(
            target: "foo::bindings",
            path = %path.display(),
            prototype = %descriptor,
            "Native library loaded"
        );

        Ok(Self {
            library,
            function,
            descriptor,
            path,
        })
    }

    /// 调用原生符号
    ///
    /// 不做范围检查，溢出行为由原生实现决定。
    #[inline]
    pub fn square(&self, value: c_int) -> c_int {
        // 符号已按 `int (int)` 解析，且库在 `self` 存活期间不会卸载
        unsafe { (self.function)(value) }
    }

    /// 调用描述符
    pub fn descriptor(&self) -> &CallDescriptor {
        &self.descriptor
    }

    /// 实际加载的位置
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 显式卸载库
    pub fn close(self) -> BindingResult<()> {
        let path = self.path.display().to_string();
        tracing::debug!(target: "foo::bindings", path = %path, "Closing native library");
        self.library.close().map_err(|e| BindingError::load(path, e))
    }
}

/// 带目录的候选且文件存在；裸文件名交给系统搜索路径，不算在内
fn is_on_disk(candidate: &Path) -> bool {
    candidate
        .parent()
        .is_some_and(|dir| !dir.as_os_str().is_empty())
        && candidate.is_file()
}

/// 汇总每个候选的失败原因，错误归到最后尝试的位置
fn load_failure(name: &str, failures: &[(PathBuf, libloading::Error)]) -> BindingError {
    let Some((last, _)) = failures.last() else {
        return BindingError::load(name, "no candidate locations");
    };

    let reason = failures
        .iter()
        .map(|(path, e)| format!("{}: {}", path.display(), e))
        .collect::<Vec<_>>()
        .join("; ");
    BindingError::load(last.display().to_string(), reason)
}
