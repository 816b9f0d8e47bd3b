use crate::domain::errors::DomainResult;
use crate::ports::TranslatorPort;
use std::collections::HashMap;
use tracing::{debug, info};

/// 翻译目录：语言代码 -> (原文 -> 译文)
pub type TranslationCatalog = HashMap<String, HashMap<String, String>>;

/// 界面字符串翻译器
///
/// 占位符规则：
/// - `@name`：HTML 转义后插入
/// - `%name`：HTML 转义并包裹 `<em class="placeholder">`
/// - `!name`：原样插入
#[derive(Debug, Clone, Default)]
pub struct Translator {
    langcode: String,
    catalog: TranslationCatalog,
}

impl Translator {
    pub fn new(langcode: impl Into<String>, catalog: TranslationCatalog) -> Self {
        Self {
            langcode: langcode.into(),
            catalog,
        }
    }

    /// 从 JSON 文件加载翻译目录
    pub fn from_file(langcode: impl Into<String>, path: &str) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: TranslationCatalog = serde_json::from_str(&content)?;
        let langcode = langcode.into();

        info!(
            path,
            langcode = %langcode,
            strings = catalog.get(&langcode).map(HashMap::len).unwrap_or(0),
            "Loaded translations"
        );

        Ok(Self::new(langcode, catalog))
    }
}

impl TranslatorPort for Translator {
    /// 翻译原文并替换占位符，缺失译文时使用原文
    fn t(&self, source: &str, args: &[(&str, &str)]) -> String {
        let translated = match self
            .catalog
            .get(&self.langcode)
            .and_then(|strings| strings.get(source))
        {
            Some(translation) => translation.as_str(),
            None => {
                debug!(langcode = %self.langcode, source, "No translation found");
                source
            }
        };

        format_string(translated, args)
    }
}

/// 单遍替换占位符：每个位置匹配最长的键，替换值不再参与匹配
pub fn format_string(text: &str, args: &[(&str, &str)]) -> String {
    let mut keys: Vec<(&str, String)> = args
        .iter()
        .filter_map(|(key, value)| {
            let replacement = match key.chars().next()? {
                '@' => escape_html(value),
                '%' => format!("<em class=\"placeholder\">{}</em>", escape_html(value)),
                '!' => value.to_string(),
                _ => return None,
            };
            Some((*key, replacement))
        })
        .collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match keys.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, replacement)) => {
                output.push_str(replacement);
                rest = &rest[key.len()..];
            }
            None => {
                output.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    output
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
