//! 调用描述符
//!
//! 描述一个外部符号的名字和 C 调用约定下的参数/返回类型。

use std::fmt;

/// C 标量类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfiType {
    /// 平台原生宽度的有符号整数，对应 `c_int`
    Int,
}

impl FfiType {
    /// C 语言拼写
    pub fn c_name(&self) -> &'static str {
        match self {
            FfiType::Int => "int",
        }
    }
}

impl fmt::Display for FfiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// 调用描述符：符号名 + 参数类型 + 返回类型
///
/// 在打开库时建立，之后不可变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallDescriptor {
    /// 导出的符号名
    pub symbol: &'static str,
    /// 参数类型（按顺序）
    pub args: &'static [FfiType],
    /// 返回类型
    pub ret: FfiType,
}

/// `int square(int)`
pub const SQUARE: CallDescriptor = CallDescriptor::new("square", &[FfiType::Int], FfiType::Int);

impl CallDescriptor {
    pub const fn new(symbol: &'static str, args: &'static [FfiType], ret: FfiType) -> Self {
        Self { symbol, args, ret }
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// 以 NUL 结尾的符号名，供动态加载器查找
    pub fn symbol_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.symbol.len() + 1);
        bytes.extend_from_slice(self.symbol.as_bytes());
        bytes.push(0);
        bytes
    }
}

impl fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.ret, self.symbol)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_prototype() {
        assert_eq!(SQUARE.to_string(), "int square(int)");
        assert_eq!(SQUARE.arity(), 1);
        assert_eq!(SQUARE.ret, FfiType::Int);
    }

    #[test]
    fn test_symbol_bytes_nul_terminated() {
        assert_eq!(SQUARE.symbol_bytes(), b"square\0".to_vec());
    }

    #[test]
    fn test_multi_argument_rendering() {
        const ADD: CallDescriptor =
            CallDescriptor::new("add", &[FfiType::Int, FfiType::Int], FfiType::Int);
        assert_eq!(ADD.to_string(), "int add(int, int)");
    }
}
