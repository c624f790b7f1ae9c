// crates/xf_velocity/src/lib.rs

//! XFEM 运动界面速度
//!
//! 界面追踪求解器按界面点编号查询界面速度。本 crate 提供：
//!
//! - [`traits`]: 查询接口 `MovingInterfaceVelocity` 与共享基类 `VelocityBase`
//! - [`registry`]: 按类型名构造对象的 `VelocityFactory`
//! - [`providers`]: 内置速度对象（`XFEMC4VelocityZero`）
//! - [`input`]: JSON 输入文件
//! - [`error`]: 错误类型
//!
//! # 示例
//!
//! ```rust
//! use xf_velocity::{VelocityFactory, VelocityInput};
//!
//! let factory = VelocityFactory::with_builtins().unwrap();
//! let input: VelocityInput = r#"{
//!     "UserObjects": { "velocity": { "type": "XFEMC4VelocityZero" } }
//! }"#.parse().unwrap();
//!
//! for velocity in input.build(&factory).unwrap() {
//!     assert_eq!(velocity.compute_moving_interface_velocity(0), 0.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod input;
pub mod providers;
pub mod registry;
pub mod traits;

pub use error::VelocityError;
pub use input::{ObjectBlock, VelocityInput};
pub use providers::{register_all, C4VelocityZero};
pub use registry::VelocityFactory;
pub use traits::{MovingInterfaceVelocity, VelocityBase, VelocityObject};
