use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 支付数据字段值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentDataValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl fmt::Display for PaymentDataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentDataValue::Text(value) => f.write_str(value),
            PaymentDataValue::Integer(value) => write!(f, "{}", value),
            PaymentDataValue::Flag(value) => write!(f, "{}", u8::from(*value)),
        }
    }
}

impl From<String> for PaymentDataValue {
    fn from(value: String) -> Self {
        PaymentDataValue::Text(value)
    }
}

impl From<&str> for PaymentDataValue {
    fn from(value: &str) -> Self {
        PaymentDataValue::Text(value.to_string())
    }
}

impl From<i64> for PaymentDataValue {
    fn from(value: i64) -> Self {
        PaymentDataValue::Integer(value)
    }
}

impl From<bool> for PaymentDataValue {
    fn from(value: bool) -> Self {
        PaymentDataValue::Flag(value)
    }
}

/// 发往 SBPS 的支付数据：字段名 -> 字段值，保持字段顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentData {
    fields: IndexMap<String, PaymentDataValue>,
}

impl PaymentData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或覆盖字段
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<PaymentDataValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// 移除字段，不存在时不做任何事
    pub fn remove(&mut self, field: &str) -> Option<PaymentDataValue> {
        self.fields.shift_remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&PaymentDataValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaymentDataValue)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<PaymentDataValue>> FromIterator<(K, V)> for PaymentData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (field, value) in iter {
            data.insert(field, value);
        }
        data
    }
}
