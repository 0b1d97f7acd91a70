//! 集成测试共用的辅助函数

#![allow(dead_code)]

use foo::{BindingConfig, LibraryConfig};
use std::path::{Path, PathBuf};

/// 定位本 crate 构建出的 cdylib（即 libfoo）
///
/// 测试可执行文件位于 `target/<profile>/deps`，cdylib 在同一目录或上一级目录。
pub fn native_library_path() -> PathBuf {
    let exe = std::env::current_exe().expect("test executable path");
    let deps = exe.parent().expect("deps directory").to_path_buf();
    let file_name = LibraryConfig::default().file_name();

    let mut dirs = vec![deps.clone()];
    if let Some(profile) = deps.parent() {
        dirs.push(profile.to_path_buf());
    }

    dirs.iter()
        .map(|dir| dir.join(&file_name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| panic!("{:?} not found next to {}", file_name, exe.display()))
}

/// 目录形式：供 `search_paths` 使用
pub fn native_library_dir() -> PathBuf {
    native_library_path()
        .parent()
        .map(Path::to_path_buf)
        .expect("library directory")
}

/// 显式路径配置
pub fn native_config() -> BindingConfig {
    BindingConfig::with_library_path(native_library_path())
}

/// 指向不存在的库
pub fn missing_config() -> BindingConfig {
    BindingConfig {
        library: LibraryConfig {
            name: "foo_binding_absent".to_string(),
            ..LibraryConfig::default()
        },
        ..BindingConfig::default()
    }
}
