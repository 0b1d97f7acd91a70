//! 核心宏定义

/// 用字段初值列表为配置结构体实现 `Default`
///
/// 使用示例:
/// ```rust
/// use foo::impl_default;
///
/// struct LibraryDefaults {
///     name: String,
///     retries: u32,
/// }
///
/// impl_default!(LibraryDefaults {
///     name: "foo".to_string(),
///     retries: 0,
/// });
///
/// assert_eq!(LibraryDefaults::default().name, "foo");
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
