use serde::{Deserialize, Serialize};

/// 提交字段值
///
/// 前端把所有字段当作文本编辑，提交时可能是字符串、数字或 null。
/// 按原始 JSON 类型绑定，由 SQLite 的列亲和性完成类型转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}
