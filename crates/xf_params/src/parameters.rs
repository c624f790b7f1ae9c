// crates/xf_params/src/parameters.rs

//! InputParameters - 对象参数表
//!
//! 每个用户对象通过一个静态函数声明自己接受的参数（名称、类型、默认值、
//! 说明）以及类描述。派生对象先取得父对象的参数表，再追加自己的选项。
//! 输入文件中的原始值在构造对象之前按此参数表校验。

use std::collections::HashMap;

use crate::error::ParamError;
use crate::value::{ParamKind, ParamValue};

/// 单个参数的声明
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// 参数名
    pub name: String,
    /// 参数类型
    pub kind: ParamKind,
    /// 默认值
    pub default: Option<ParamValue>,
    /// 是否必需
    pub required: bool,
    /// 说明文字
    pub doc: String,
}

/// 参数表
///
/// # 示例
///
/// ```rust
/// use xf_params::{InputParameters, ParamKind};
///
/// let mut params = InputParameters::new();
/// params.add_class_description("Example object");
/// params.add_param("enable", true, "Whether the object is active").unwrap();
/// params.add_required_param("speed", ParamKind::Real, "Interface speed").unwrap();
///
/// params.set("speed", 2_i64).unwrap();
/// params.check_required().unwrap();
/// assert_eq!(params.get_real("speed").unwrap(), 2.0);
/// assert!(params.get_bool("enable").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputParameters {
    class_description: String,
    specs: Vec<ParamSpec>,
    index: HashMap<String, usize>,
    values: HashMap<String, ParamValue>,
}

impl InputParameters {
    /// 创建空参数表
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置类描述（后设置的覆盖先设置的）
    pub fn add_class_description(&mut self, description: impl Into<String>) {
        self.class_description = description.into();
    }

    /// 类描述
    pub fn class_description(&self) -> &str {
        &self.class_description
    }

    /// 声明带默认值的可选参数
    pub fn add_param(
        &mut self,
        name: &str,
        default: impl Into<ParamValue>,
        doc: &str,
    ) -> Result<(), ParamError> {
        let default = default.into();
        self.push_spec(ParamSpec {
            name: name.to_string(),
            kind: default.kind(),
            default: Some(default),
            required: false,
            doc: doc.to_string(),
        })
    }

    /// 声明必需参数
    pub fn add_required_param(
        &mut self,
        name: &str,
        kind: ParamKind,
        doc: &str,
    ) -> Result<(), ParamError> {
        self.push_spec(ParamSpec {
            name: name.to_string(),
            kind,
            default: None,
            required: true,
            doc: doc.to_string(),
        })
    }

    fn push_spec(&mut self, spec: ParamSpec) -> Result<(), ParamError> {
        if self.index.contains_key(&spec.name) {
            return Err(ParamError::Duplicate(spec.name));
        }
        self.index.insert(spec.name.clone(), self.specs.len());
        self.specs.push(spec);
        Ok(())
    }

    /// 合并父参数表
    ///
    /// 父表的声明和已设置的值排在前面；类描述仅在本表为空时继承。
    pub fn merge(&mut self, parent: InputParameters) -> Result<(), ParamError> {
        let own_specs = std::mem::take(&mut self.specs);
        self.index.clear();
        for spec in parent.specs.into_iter().chain(own_specs) {
            self.push_spec(spec)?;
        }
        for (name, value) in parent.values {
            self.values.entry(name).or_insert(value);
        }
        if self.class_description.is_empty() {
            self.class_description = parent.class_description;
        }
        Ok(())
    }

    /// 查找参数声明
    pub fn spec(&self, name: &str) -> Option<&ParamSpec> {
        self.index.get(name).and_then(|&i| self.specs.get(i))
    }

    /// 按声明顺序遍历参数
    pub fn specs(&self) -> impl Iterator<Item = &ParamSpec> {
        self.specs.iter()
    }

    /// 参数数量
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// 是否没有声明任何参数
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// 设置参数值
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<(), ParamError> {
        let spec = self.spec(name).ok_or_else(|| self.unknown(name))?;
        let value = value.into();
        let actual = value.kind();
        let expected = spec.kind;
        let value = value.coerce(expected).ok_or_else(|| ParamError::TypeMismatch {
            name: name.to_string(),
            expected,
            actual,
        })?;
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// 应用输入文件中的原始键值
    pub fn apply_raw(
        &mut self,
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), ParamError> {
        for (name, json) in raw {
            if self.spec(name).is_none() {
                return Err(self.unknown(name));
            }
            let value = ParamValue::from_json(json).ok_or_else(|| ParamError::Unsupported {
                name: name.clone(),
                value: json.to_string(),
            })?;
            self.set(name, value)?;
        }
        Ok(())
    }

    /// 检查所有必需参数均已设置
    pub fn check_required(&self) -> Result<(), ParamError> {
        match self
            .specs
            .iter()
            .find(|s| s.required && !self.values.contains_key(&s.name))
        {
            Some(spec) => Err(ParamError::MissingRequired(spec.name.clone())),
            None => Ok(()),
        }
    }

    /// 参数已声明且有值（显式设置或默认值）
    pub fn is_param_valid(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// 参数当前值，未显式设置时取默认值
    pub fn get(&self, name: &str) -> Result<&ParamValue, ParamError> {
        let spec = self.spec(name).ok_or_else(|| self.unknown(name))?;
        self.values
            .get(name)
            .or(spec.default.as_ref())
            .ok_or_else(|| ParamError::NotSet(name.to_string()))
    }

    /// 取布尔参数
    pub fn get_bool(&self, name: &str) -> Result<bool, ParamError> {
        match self.get(name)? {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(self.mismatch(name, ParamKind::Bool, other)),
        }
    }

    /// 取整数参数
    pub fn get_int(&self, name: &str) -> Result<i64, ParamError> {
        match self.get(name)? {
            ParamValue::Int(v) => Ok(*v),
            other => Err(self.mismatch(name, ParamKind::Int, other)),
        }
    }

    /// 取浮点参数
    pub fn get_real(&self, name: &str) -> Result<f64, ParamError> {
        match self.get(name)? {
            ParamValue::Real(v) => Ok(*v),
            ParamValue::Int(v) => Ok(*v as f64),
            other => Err(self.mismatch(name, ParamKind::Real, other)),
        }
    }

    /// 取字符串参数
    pub fn get_str(&self, name: &str) -> Result<&str, ParamError> {
        match self.get(name)? {
            ParamValue::Str(v) => Ok(v),
            other => Err(self.mismatch(name, ParamKind::Str, other)),
        }
    }

    fn unknown(&self, name: &str) -> ParamError {
        ParamError::Unknown {
            name: name.to_string(),
            available: self.specs.iter().map(|s| s.name.clone()).collect(),
        }
    }

    fn mismatch(&self, name: &str, expected: ParamKind, actual: &ParamValue) -> ParamError {
        ParamError::TypeMismatch {
            name: name.to_string(),
            expected,
            actual: actual.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> InputParameters {
        let mut p = InputParameters::new();
        p.add_class_description("base object");
        p.add_param("use_displaced_mesh", false, "displaced").unwrap();
        p
    }

    fn raw(v: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_visible() {
        let p = base();
        assert!(!p.get_bool("use_displaced_mesh").unwrap());
        assert!(p.is_param_valid("use_displaced_mesh"));
        assert!(!p.is_param_valid("missing"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut p = base();
        let err = p.add_param("use_displaced_mesh", true, "again").unwrap_err();
        assert_eq!(err, ParamError::Duplicate("use_displaced_mesh".into()));
    }

    #[test]
    fn test_set_type_checked() {
        let mut p = base();
        let err = p.set("use_displaced_mesh", "yes").unwrap_err();
        assert!(matches!(err, ParamError::TypeMismatch { .. }));
        p.set("use_displaced_mesh", true).unwrap();
        assert!(p.get_bool("use_displaced_mesh").unwrap());
    }

    #[test]
    fn test_required_param() {
        let mut p = base();
        p.add_required_param("speed", ParamKind::Real, "speed").unwrap();
        assert_eq!(
            p.check_required().unwrap_err(),
            ParamError::MissingRequired("speed".into())
        );
        assert_eq!(p.get_real("speed").unwrap_err(), ParamError::NotSet("speed".into()));

        p.apply_raw(&raw(json!({ "speed": 3 }))).unwrap();
        p.check_required().unwrap();
        assert_eq!(p.get_real("speed").unwrap(), 3.0);
    }

    #[test]
    fn test_apply_raw_unknown_key() {
        let mut p = base();
        let err = p.apply_raw(&raw(json!({ "velocity": 1.0 }))).unwrap_err();
        match err {
            ParamError::Unknown { name, available } => {
                assert_eq!(name, "velocity");
                assert_eq!(available, vec!["use_displaced_mesh".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_apply_raw_unsupported() {
        let mut p = base();
        let err = p
            .apply_raw(&raw(json!({ "use_displaced_mesh": [true] })))
            .unwrap_err();
        assert!(matches!(err, ParamError::Unsupported { .. }));
    }

    #[test]
    fn test_merge_parent_first() {
        let mut child = InputParameters::new();
        child.add_param("order", 2_i64, "order").unwrap();
        child.merge(base()).unwrap();

        let names: Vec<_> = child.specs().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["use_displaced_mesh", "order"]);
        assert_eq!(child.class_description(), "base object");
        assert_eq!(child.get_int("order").unwrap(), 2);
    }

    #[test]
    fn test_merge_keeps_child_description() {
        let mut child = InputParameters::new();
        child.add_class_description("child object");
        child.merge(base()).unwrap();
        assert_eq!(child.class_description(), "child object");
    }

    #[test]
    fn test_merge_duplicate_rejected() {
        let mut child = base();
        assert!(child.merge(base()).is_err());
    }
}
