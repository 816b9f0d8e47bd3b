use serde::{Deserialize, Serialize};

/// 站点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// 站点名称
    pub site_name: String,

    /// 默认语言代码
    pub default_langcode: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Commerce".to_string(),
            default_langcode: "en".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            site_name: lookup("SITE_NAME")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.site_name),
            default_langcode: lookup("SITE_DEFAULT_LANGCODE")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.default_langcode),
        }
    }
}
