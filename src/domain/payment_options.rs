use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 支付方式选项：机器名 -> 显示名称，插入顺序即显示顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodOptions {
    options: IndexMap<String, String>,
}

impl PaymentMethodOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增选项；已存在的机器名原位替换显示名称
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.options.insert(id.into(), label.into());
    }

    /// 移除选项，不存在时不做任何事
    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.options.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.options.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PaymentMethodOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (id, label) in iter {
            options.insert(id, label);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_display_order() {
        let options: PaymentMethodOptions =
            [("credit", "Credit card"), ("webcvs", "Convenience store")]
                .into_iter()
                .collect();

        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["credit", "webcvs"]);
    }

    #[test]
    fn test_replace_label_in_place() {
        let mut options: PaymentMethodOptions =
            [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect();

        options.insert("b", "Bee");

        assert_eq!(options.get("b"), Some("Bee"));
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut options: PaymentMethodOptions =
            [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect();
        let before = options.clone();

        assert_eq!(options.remove("zzz"), None);
        assert_eq!(options, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut options: PaymentMethodOptions =
            [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect();

        options.remove("a");

        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }
}
