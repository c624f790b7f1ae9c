// crates/xf_velocity/src/registry.rs

//! 速度对象注册中心
//!
//! 类型名到构造函数的映射。注册只追加不删除；启动阶段通过
//! [`register_all`](crate::providers::register_all) 显式填充，之后只读，
//! 可以按引用在线程间共享。

use std::collections::BTreeMap;

use tracing::debug;
use xf_params::{InputParameters, ParamError};

use crate::error::VelocityError;
use crate::providers;
use crate::traits::{MovingInterfaceVelocity, VelocityBase, VelocityObject};

type ParamsFn = fn() -> Result<InputParameters, ParamError>;
type BuildFn = fn(VelocityBase) -> Result<Box<dyn MovingInterfaceVelocity>, VelocityError>;

/// 注册项
#[derive(Clone, Copy)]
struct FactoryEntry {
    valid_params: ParamsFn,
    build: BuildFn,
}

fn build_boxed<T: VelocityObject>(
    base: VelocityBase,
) -> Result<Box<dyn MovingInterfaceVelocity>, VelocityError> {
    Ok(Box::new(T::new(base)?))
}

/// 速度对象工厂
///
/// # 示例
///
/// ```rust
/// use xf_velocity::VelocityFactory;
///
/// let factory = VelocityFactory::with_builtins().unwrap();
/// let velocity = factory
///     .create("XFEMC4VelocityZero", "velocity", &serde_json::Map::new())
///     .unwrap();
/// assert_eq!(velocity.compute_moving_interface_velocity(3), 0.0);
/// ```
#[derive(Default)]
pub struct VelocityFactory {
    entries: BTreeMap<&'static str, FactoryEntry>,
}

impl VelocityFactory {
    /// 创建空工厂
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并注册全部内置对象
    pub fn with_builtins() -> Result<Self, VelocityError> {
        let mut factory = Self::new();
        providers::register_all(&mut factory)?;
        Ok(factory)
    }

    /// 注册速度对象类型
    pub fn register<T: VelocityObject>(&mut self) -> Result<(), VelocityError> {
        if self.entries.contains_key(T::TYPE_NAME) {
            return Err(VelocityError::AlreadyRegistered(T::TYPE_NAME.to_string()));
        }
        self.entries.insert(
            T::TYPE_NAME,
            FactoryEntry {
                valid_params: T::valid_params,
                build: build_boxed::<T>,
            },
        );
        debug!("Registered velocity object: {}", T::TYPE_NAME);
        Ok(())
    }

    /// 类型是否已注册
    pub fn is_registered(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// 已注册类型名（按字典序）
    pub fn registered_types(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// 已注册类型数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否未注册任何类型
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 类型的参数声明
    pub fn valid_params(&self, type_name: &str) -> Result<InputParameters, VelocityError> {
        let entry = self.entry(type_name)?;
        (entry.valid_params)().map_err(|e| VelocityError::param(type_name, e))
    }

    /// 类型的类描述
    pub fn description(&self, type_name: &str) -> Result<String, VelocityError> {
        Ok(self.valid_params(type_name)?.class_description().to_string())
    }

    /// 按类型名构造速度对象
    ///
    /// `raw` 为输入文件中该对象的参数（不含 `type`），先按参数声明校验再构造。
    pub fn create(
        &self,
        type_name: &str,
        name: &str,
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Box<dyn MovingInterfaceVelocity>, VelocityError> {
        let entry = self.entry(type_name)?;
        let mut params = (entry.valid_params)().map_err(|e| VelocityError::param(name, e))?;
        params
            .apply_raw(raw)
            .and_then(|_| params.check_required())
            .map_err(|e| VelocityError::param(name, e))?;

        let object = (entry.build)(VelocityBase::new(name, params))?;
        debug!("Created velocity object '{}' ({})", name, type_name);
        Ok(object)
    }

    fn entry(&self, type_name: &str) -> Result<FactoryEntry, VelocityError> {
        self.entries
            .get(type_name)
            .copied()
            .ok_or_else(|| VelocityError::UnknownType {
                type_name: type_name.to_string(),
                available: self.entries.keys().map(|k| k.to_string()).collect(),
            })
    }
}

impl std::fmt::Debug for VelocityFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VelocityFactory")
            .field("types", &self.registered_types())
            .finish()
    }
}
