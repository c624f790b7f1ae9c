// crates/xf_velocity/src/providers/zero.rs

//! 固定界面零速度
//!
//! 界面不运动时使用：任意界面点的速度恒为零。

use xf_params::{InputParameters, ParamError};

use crate::error::VelocityError;
use crate::traits::{MovingInterfaceVelocity, VelocityBase, VelocityObject};

/// 类描述
pub const DESCRIPTION: &str = "Velocity object for fixed 2D interfaces (zero velocity)";

/// 固定二维界面的零速度对象
///
/// 除基类参数外不声明任何参数。
#[derive(Debug, Clone)]
pub struct C4VelocityZero {
    base: VelocityBase,
}

impl VelocityObject for C4VelocityZero {
    const TYPE_NAME: &'static str = "XFEMC4VelocityZero";

    fn valid_params() -> Result<InputParameters, ParamError> {
        let mut params = VelocityBase::valid_params()?;
        params.add_class_description(DESCRIPTION);
        Ok(params)
    }

    fn new(base: VelocityBase) -> Result<Self, VelocityError> {
        Ok(Self { base })
    }
}

impl MovingInterfaceVelocity for C4VelocityZero {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    #[inline]
    fn compute_moving_interface_velocity(&self, _point_id: u32) -> f64 {
        0.0
    }

    fn parameters(&self) -> &InputParameters {
        self.base.parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero() -> C4VelocityZero {
        let params = C4VelocityZero::valid_params().unwrap();
        C4VelocityZero::new(VelocityBase::new("velocity", params)).unwrap()
    }

    #[test]
    fn test_description() {
        let params = C4VelocityZero::valid_params().unwrap();
        assert_eq!(params.class_description(), DESCRIPTION);
    }

    #[test]
    fn test_inherits_base_params_only() {
        let own: Vec<_> = C4VelocityZero::valid_params()
            .unwrap()
            .specs()
            .map(|s| s.name.clone())
            .collect();
        let base: Vec<_> = VelocityBase::valid_params()
            .unwrap()
            .specs()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(own, base);
    }

    #[test]
    fn test_zero_at_boundaries() {
        let v = zero();
        assert_eq!(v.compute_moving_interface_velocity(0), 0.0);
        assert_eq!(v.compute_moving_interface_velocity(u32::MAX), 0.0);
    }

    #[test]
    fn test_identity() {
        let v = zero();
        assert_eq!(v.name(), "velocity");
        assert_eq!(v.type_name(), "XFEMC4VelocityZero");
        assert_eq!(v.enabled(), Ok(true));
        assert_eq!(v.use_displaced_mesh(), Ok(false));
    }
}
