// crates/xf_params/src/value.rs

//! 参数值与参数类型
//!
//! 输入文件中的每个选项最终都落到 [`ParamValue`] 的四种形态之一。

use serde::{Deserialize, Serialize};

/// 参数类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// 布尔
    Bool,
    /// 整数
    Int,
    /// 浮点数
    Real,
    /// 字符串
    Str,
}

impl ParamKind {
    /// 类型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Real => "real",
            Self::Str => "string",
        }
    }

    /// `actual` 类型的值能否赋给本类型的参数
    ///
    /// 整数可以加宽为浮点数，其余必须完全一致。
    #[inline]
    pub fn accepts(&self, actual: ParamKind) -> bool {
        *self == actual || (*self == Self::Real && actual == Self::Int)
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// 参数值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// 布尔
    Bool(bool),
    /// 整数
    Int(i64),
    /// 浮点数
    Real(f64),
    /// 字符串
    Str(String),
}

impl ParamValue {
    /// 值的类型
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Bool(_) => ParamKind::Bool,
            Self::Int(_) => ParamKind::Int,
            Self::Real(_) => ParamKind::Real,
            Self::Str(_) => ParamKind::Str,
        }
    }

    /// 按目标类型转换，整数到浮点数会加宽
    pub fn coerce(self, target: ParamKind) -> Option<Self> {
        if !target.accepts(self.kind()) {
            return None;
        }
        match self {
            Self::Int(v) if target == ParamKind::Real => Some(Self::Real(v as f64)),
            v => Some(v),
        }
    }

    /// 从 JSON 值转换
    ///
    /// 数组、对象和 null 没有对应的参数类型，返回 `None`。
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Real)),
            serde_json::Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{}", v),
            Self::Str(v) => write!(f, "\"{}\"", v),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
