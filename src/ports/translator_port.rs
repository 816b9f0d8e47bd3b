use std::fmt::Debug;

/// 界面字符串翻译端口
pub trait TranslatorPort: Send + Sync + Debug {
    /// 翻译原文并替换占位符（`@name`、`%name`、`!name`）
    fn t(&self, source: &str, args: &[(&str, &str)]) -> String;
}
