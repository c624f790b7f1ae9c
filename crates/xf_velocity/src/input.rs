// crates/xf_velocity/src/input.rs

//! 输入文件
//!
//! JSON 格式，速度对象放在 `UserObjects` 块下，按 `type` 选择实现：
//!
//! ```json
//! {
//!   "UserObjects": {
//!     "velocity": { "type": "XFEMC4VelocityZero", "use_displaced_mesh": false }
//!   }
//! }
//! ```
//!
//! 其余顶层块属于宿主框架，这里忽略。

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VelocityError;
use crate::registry::VelocityFactory;
use crate::traits::MovingInterfaceVelocity;

/// 单个对象块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectBlock {
    /// 注册类型名
    #[serde(rename = "type")]
    pub type_name: String,

    /// 其余参数
    #[serde(flatten)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// 速度对象输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityInput {
    /// 对象块，按块名排序
    #[serde(rename = "UserObjects", default)]
    pub user_objects: BTreeMap<String, ObjectBlock>,
}

impl VelocityInput {
    /// 从文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VelocityError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VelocityError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// 块数量
    pub fn len(&self) -> usize {
        self.user_objects.len()
    }

    /// 是否没有对象块
    pub fn is_empty(&self) -> bool {
        self.user_objects.is_empty()
    }

    /// 构造全部对象
    ///
    /// 任一块失败即返回，错误中带有块名。
    pub fn build(
        &self,
        factory: &VelocityFactory,
    ) -> Result<Vec<Box<dyn MovingInterfaceVelocity>>, VelocityError> {
        self.user_objects
            .iter()
            .map(|(name, block)| {
                factory
                    .create(&block.type_name, name, &block.params)
                    .map_err(|e| VelocityError::Block {
                        block: name.clone(),
                        source: Box::new(e),
                    })
            })
            .collect()
    }
}

impl FromStr for VelocityInput {
    type Err = VelocityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input: VelocityInput = serde_json::from_str(s)?;
        debug!("Parsed input with {} user object(s)", input.len());
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let input: VelocityInput = r#"{
            "Mesh": { "dim": 2 },
            "UserObjects": {
                "velocity": { "type": "XFEMC4VelocityZero", "use_displaced_mesh": true }
            }
        }"#
        .parse()
        .unwrap();

        let block = &input.user_objects["velocity"];
        assert_eq!(block.type_name, "XFEMC4VelocityZero");
        assert_eq!(block.params.len(), 1);
        assert_eq!(block.params["use_displaced_mesh"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_missing_section_is_empty() {
        let input: VelocityInput = "{}".parse().unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_missing_type_fails() {
        let err = r#"{ "UserObjects": { "velocity": {} } }"#
            .parse::<VelocityInput>()
            .unwrap_err();
        assert!(matches!(err, VelocityError::Parse(_)));
    }

    #[test]
    fn test_build_reports_block() {
        let factory = VelocityFactory::with_builtins().unwrap();
        let input: VelocityInput =
            r#"{ "UserObjects": { "moving": { "type": "XFEMC4VelocityOne" } } }"#
                .parse()
                .unwrap();
        match input.build(&factory) {
            Err(VelocityError::Block { block, source }) => {
                assert_eq!(block, "moving");
                assert!(matches!(*source, VelocityError::UnknownType { .. }));
            }
            other => panic!("unexpected result: {:?}", other.map(|v| v.len())),
        }
    }
}
