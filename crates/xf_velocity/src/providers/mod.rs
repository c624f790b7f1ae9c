// crates/xf_velocity/src/providers/mod.rs

//! 内置速度对象

pub mod zero;

pub use zero::C4VelocityZero;

use crate::error::VelocityError;
use crate::registry::VelocityFactory;

/// 注册全部内置速度对象
///
/// 启动时显式调用一次；重复调用会因类型名已注册而失败。
pub fn register_all(factory: &mut VelocityFactory) -> Result<(), VelocityError> {
    factory.register::<C4VelocityZero>()?;
    Ok(())
}
