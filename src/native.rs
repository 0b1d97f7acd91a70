//! libfoo 的参考实现
//!
//! 本 crate 的 cdylib 产物就是 libfoo：导出 C 链接的 `int square(int)`。
//!
//! 该符号不经名字修饰，会进入所有链接本 crate 的产物；只使用绑定的下游应关闭
//! 默认的 `native` feature，避免自己的 cdylib 也导出 `square`。

use std::os::raw::c_int;

/// 整数平方，溢出时按补码回绕
#[no_mangle]
pub extern "C" fn square(value: c_int) -> c_int {
    value.wrapping_mul(value)
}
