// crates/xf_params/src/error.rs

//! 参数层错误类型

use crate::value::ParamKind;

/// 参数错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// 未声明的参数
    #[error("未知参数 '{name}' (可用参数: {available:?})")]
    Unknown {
        /// 参数名
        name: String,
        /// 已声明的参数名列表
        available: Vec<String>,
    },

    /// 重复声明
    #[error("参数 '{0}' 重复声明")]
    Duplicate(String),

    /// 类型不匹配
    #[error("参数 '{name}' 类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        /// 参数名
        name: String,
        /// 声明的类型
        expected: ParamKind,
        /// 提供的类型
        actual: ParamKind,
    },

    /// 缺失必需参数
    #[error("缺失必需参数: {0}")]
    MissingRequired(String),

    /// 参数已声明但没有值
    #[error("参数 '{0}' 未设置且无默认值")]
    NotSet(String),

    /// 不支持的输入值（数组、对象、null）
    #[error("参数 '{name}' 的值不受支持: {value}")]
    Unsupported {
        /// 参数名
        name: String,
        /// 原始输入
        value: String,
    },
}
