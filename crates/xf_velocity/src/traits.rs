// crates/xf_velocity/src/traits.rs

//! 运动界面速度接口
//!
//! 界面追踪求解器通过 [`MovingInterfaceVelocity`] 按界面点编号查询法向速度，
//! 不关心具体的速度策略。具体策略实现 [`VelocityObject`]，由
//! [`VelocityFactory`](crate::registry::VelocityFactory) 按类型名构造。

use xf_params::{InputParameters, ParamError};

use crate::error::VelocityError;

/// 运动界面速度基类描述
pub const BASE_DESCRIPTION: &str = "Base class for moving interface velocity objects";

/// 运动界面速度查询接口
///
/// 实现必须是线程安全的：求解器可能在多个线程中同时查询同一个对象。
pub trait MovingInterfaceVelocity: Send + Sync {
    /// 输入文件中的对象名
    fn name(&self) -> &str;

    /// 注册类型名
    fn type_name(&self) -> &'static str;

    /// 计算界面点 `point_id` 处的界面速度
    fn compute_moving_interface_velocity(&self, point_id: u32) -> f64;

    /// 对象参数
    fn parameters(&self) -> &InputParameters;

    /// 求解器是否应查询此对象
    ///
    /// 读取基类声明的 `enable` 参数；参数表不含该选项时返回错误。
    fn enabled(&self) -> Result<bool, ParamError> {
        self.parameters().get_bool("enable")
    }

    /// 是否在变形网格上计算
    fn use_displaced_mesh(&self) -> Result<bool, ParamError> {
        self.parameters().get_bool("use_displaced_mesh")
    }
}

/// 可注册的速度对象
pub trait VelocityObject: MovingInterfaceVelocity + Sized + 'static {
    /// 注册类型名
    const TYPE_NAME: &'static str;

    /// 参数声明
    ///
    /// 仅在重复声明同名参数时失败。
    fn valid_params() -> Result<InputParameters, ParamError>;

    /// 由已校验的基类状态构造
    fn new(base: VelocityBase) -> Result<Self, VelocityError>;
}

/// 速度对象共享的构造状态
#[derive(Debug, Clone)]
pub struct VelocityBase {
    name: String,
    params: InputParameters,
}

impl VelocityBase {
    /// 基类参数声明
    ///
    /// 派生对象在自己的 `valid_params` 中以此为起点。
    pub fn valid_params() -> Result<InputParameters, ParamError> {
        let mut params = InputParameters::new();
        params.add_class_description(BASE_DESCRIPTION);
        params.add_param(
            "use_displaced_mesh",
            false,
            "Whether the interface velocity is evaluated on the displaced mesh",
        )?;
        params.add_param(
            "enable",
            true,
            "Set to false to exclude this object from the interface update",
        )?;
        Ok(params)
    }

    /// 创建基类状态
    pub fn new(name: impl Into<String>, params: InputParameters) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// 对象名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 对象参数
    pub fn parameters(&self) -> &InputParameters {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_params() {
        let params = VelocityBase::valid_params().unwrap();
        assert_eq!(params.class_description(), BASE_DESCRIPTION);
        assert_eq!(params.len(), 2);
        assert!(!params.get_bool("use_displaced_mesh").unwrap());
        assert!(params.get_bool("enable").unwrap());
    }

    struct Bare {
        params: InputParameters,
    }

    impl MovingInterfaceVelocity for Bare {
        fn name(&self) -> &str {
            "bare"
        }

        fn type_name(&self) -> &'static str {
            "Bare"
        }

        fn compute_moving_interface_velocity(&self, _point_id: u32) -> f64 {
            0.0
        }

        fn parameters(&self) -> &InputParameters {
            &self.params
        }
    }

    #[test]
    fn test_base_accessors() {
        let mut params = VelocityBase::valid_params().unwrap();
        params.set("use_displaced_mesh", true).unwrap();
        params.set("enable", false).unwrap();
        let base = VelocityBase::new("velocity", params);
        assert_eq!(base.name(), "velocity");

        let object = Bare {
            params: base.parameters().clone(),
        };
        assert_eq!(object.use_displaced_mesh(), Ok(true));
        assert_eq!(object.enabled(), Ok(false));
    }

    #[test]
    fn test_undeclared_options_reported() {
        let object = Bare {
            params: InputParameters::new(),
        };
        assert!(matches!(object.enabled(), Err(ParamError::Unknown { .. })));
        assert!(matches!(
            object.use_displaced_mesh(),
            Err(ParamError::Unknown { .. })
        ));
    }
}
