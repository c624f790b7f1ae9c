// crates/xf_params/src/lib.rs

//! XFEM 用户对象参数层
//!
//! 为用户对象提供静态参数声明与输入校验。
//!
//! # 模块概览
//!
//! - [`value`]: 参数值 `ParamValue` 与类型标签 `ParamKind`
//! - [`parameters`]: 参数表 `InputParameters`
//! - [`error`]: 参数错误类型
//!
//! # 使用流程
//!
//! ```text
//! valid_params()   ─> 声明参数与类描述（可继承父表）
//! apply_raw()      ─> 写入输入文件中的原始值（类型检查）
//! check_required() ─> 确认必需参数齐全
//! 构造对象         ─> 通过 get_* 读取参数
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod parameters;
pub mod value;

pub use error::ParamError;
pub use parameters::{InputParameters, ParamSpec};
pub use value::{ParamKind, ParamValue};
