// crates/xf_velocity/src/error.rs

//! 速度对象错误类型

use std::path::PathBuf;

use xf_params::ParamError;

/// 速度对象构建错误
///
/// 速度查询本身不会失败，这里只覆盖注册、配置与构造阶段。
#[derive(Debug, thiserror::Error)]
pub enum VelocityError {
    /// 类型名重复注册
    #[error("速度对象类型 '{0}' 已注册")]
    AlreadyRegistered(String),

    /// 未注册的类型名
    #[error("未知的速度对象类型 '{type_name}' (已注册: {available:?})")]
    UnknownType {
        /// 请求的类型名
        type_name: String,
        /// 已注册的类型名
        available: Vec<String>,
    },

    /// 参数错误
    #[error("对象 '{object}' 参数错误: {source}")]
    Param {
        /// 对象名
        object: String,
        /// 底层参数错误
        #[source]
        source: ParamError,
    },

    /// 读取输入文件失败
    #[error("无法读取输入文件 {path}: {source}")]
    Io {
        /// 文件路径
        path: PathBuf,
        /// 底层 IO 错误
        #[source]
        source: std::io::Error,
    },

    /// 输入文件解析失败
    #[error("输入文件解析错误: {0}")]
    Parse(#[from] serde_json::Error),

    /// 输入块构建失败
    #[error("输入块 [{block}] 构建失败: {source}")]
    Block {
        /// 输入块名称
        block: String,
        /// 底层错误
        #[source]
        source: Box<VelocityError>,
    },
}

impl VelocityError {
    /// 为参数错误附加对象名
    pub fn param(object: impl Into<String>, source: ParamError) -> Self {
        Self::Param {
            object: object.into(),
            source,
        }
    }
}
