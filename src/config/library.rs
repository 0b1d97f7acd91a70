/// 动态库定位配置

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use super::{ConfigError, ConfigResult};
use crate::impl_default;

/// 默认库名，平台文件名为 `libfoo.so` / `libfoo.dylib` / `foo.dll`
pub const DEFAULT_LIBRARY_NAME: &str = "foo";

/// 动态库配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// 库名（不含平台前缀和扩展名）
    pub name: String,

    /// 显式路径；设置后只尝试这一个位置
    pub path: Option<PathBuf>,

    /// 额外搜索目录，按顺序在系统搜索路径之前尝试
    pub search_paths: Vec<PathBuf>,
}

impl_default!(LibraryConfig {
    name: DEFAULT_LIBRARY_NAME.to_string(),
    path: None,
    search_paths: Vec::new(),
});

impl LibraryConfig {
    /// 使用显式路径的配置
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// 平台相关的库文件名
    pub fn file_name(&self) -> OsString {
        libloading::library_filename(&self.name)
    }

    /// 按加载顺序列出候选位置
    ///
    /// 最后一项是裸文件名，交给系统动态链接器按标准搜索路径解析。
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = self.explicit_path() {
            return vec![path.to_path_buf()];
        }

        let file_name = self.file_name();
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .chain(std::iter::once(PathBuf::from(&file_name)))
            .collect()
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError("Library name is empty".to_string()));
        }
        if self.name.contains(['/', '\\']) {
            return Err(ConfigError::ValidationError(format!(
                "Library name must not contain a path separator: {}",
                self.name
            )));
        }
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError("Library path is empty".to_string()));
            }
        }
        Ok(())
    }

    /// 显式路径（如有）
    pub fn explicit_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let config = LibraryConfig::default();
        let expected = if cfg!(windows) {
            "foo.dll"
        } else if cfg!(target_os = "macos") {
            "libfoo.dylib"
        } else {
            "libfoo.so"
        };
        assert_eq!(config.file_name(), OsString::from(expected));
    }

    #[test]
    fn test_candidates_order() {
        let config = LibraryConfig {
            search_paths: vec![PathBuf::from("/opt/foo/lib"), PathBuf::from("vendor")],
            ..LibraryConfig::default()
        };
        let file_name = config.file_name();
        let candidates = config.candidates();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], PathBuf::from("/opt/foo/lib").join(&file_name));
        assert_eq!(candidates[1], PathBuf::from("vendor").join(&file_name));
        assert_eq!(candidates[2], PathBuf::from(&file_name));
    }

    #[test]
    fn test_explicit_path_wins() {
        let mut config = LibraryConfig::with_path("/tmp/custom/libfoo.so");
        config.search_paths.push(PathBuf::from("/opt/foo/lib"));
        assert_eq!(config.candidates(), vec![PathBuf::from("/tmp/custom/libfoo.so")]);
        assert_eq!(config.explicit_path(), Some(Path::new("/tmp/custom/libfoo.so")));
    }

    #[test]
    fn test_validation() {
        assert!(LibraryConfig::default().validate().is_ok());

        let empty = LibraryConfig {
            name: "  ".to_string(),
            ..LibraryConfig::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::ValidationError(_))));

        let nested = LibraryConfig {
            name: "lib/foo".to_string(),
            ..LibraryConfig::default()
        };
        assert!(nested.validate().is_err());

        let blank_path = LibraryConfig::with_path("");
        assert!(blank_path.validate().is_err());
    }
}
