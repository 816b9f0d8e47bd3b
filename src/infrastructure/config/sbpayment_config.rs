use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// SBPS 支持的支付方式：机器名与默认显示名称
pub const SBPAYMENT_METHODS: &[(&str, &str)] = &[
    ("credit", "Credit card"),
    ("credit3d", "Credit card (3D Secure)"),
    ("webcvs", "Convenience store"),
    ("payeasy", "Pay-easy"),
    ("docomo", "Docomo"),
    ("auone", "AU"),
    ("softbank2", "SoftBank"),
    ("yahoowallet", "Yahoo! Wallet"),
    ("rakuten", "Rakuten Pay"),
    ("paypal", "PayPal"),
];

/// 查找支付方式的默认显示名称
pub fn method_label(id: &str) -> Option<&'static str> {
    SBPAYMENT_METHODS
        .iter()
        .find(|(method, _)| *method == id)
        .map(|(_, label)| *label)
}

/// SoftBank Payment Service 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SbpaymentConfig {
    /// 商户ID
    pub merchant_id: String,

    /// 服务ID
    pub service_id: String,

    /// 结果页面与通知回调的基础URL
    pub return_base_url: String,

    /// 启用的支付方式（按显示顺序）
    pub enabled_methods: Vec<String>,

    /// 商品ID
    pub item_id: String,

    /// 购买请求有效秒数
    pub limit_second: i64,

    /// 启用的扩展名称，None 表示全部启用
    pub extensions: Option<Vec<String>>,

    /// 翻译文件路径（JSON）
    pub translations_path: Option<String>,
}

impl SbpaymentConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| DomainError::ConfigurationError(format!("{} must be set", key)))
        };

        let merchant_id = required("SBPAYMENT_MERCHANT_ID")?;
        let service_id = required("SBPAYMENT_SERVICE_ID")?;

        let return_base_url = lookup("SBPAYMENT_RETURN_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let enabled_methods = match lookup("SBPAYMENT_ENABLED_METHODS") {
            Some(value) => split_list(&value),
            None => SBPAYMENT_METHODS
                .iter()
                .map(|(id, _)| id.to_string())
                .collect(),
        };

        if let Some(unknown) = enabled_methods.iter().find(|id| method_label(id).is_none()) {
            return Err(DomainError::ConfigurationError(format!(
                "Unknown SBPS payment method in SBPAYMENT_ENABLED_METHODS: {}",
                unknown
            )));
        }

        let limit_second = match lookup("SBPAYMENT_LIMIT_SECOND") {
            Some(value) => value.trim().parse::<i64>().map_err(|e| {
                DomainError::ConfigurationError(format!(
                    "SBPAYMENT_LIMIT_SECOND must be an integer: {}",
                    e
                ))
            })?,
            None => 600,
        };

        if limit_second <= 0 {
            return Err(DomainError::ConfigurationError(
                "SBPAYMENT_LIMIT_SECOND must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            merchant_id,
            service_id,
            return_base_url,
            enabled_methods,
            item_id: lookup("SBPAYMENT_ITEM_ID").unwrap_or_else(|| "commerce_order".to_string()),
            limit_second,
            extensions: lookup("SBPAYMENT_EXTENSIONS").map(|value| split_list(&value)),
            translations_path: lookup("SBPAYMENT_TRANSLATIONS").filter(|p| !p.trim().is_empty()),
        })
    }

    pub fn return_url(&self, path: &str) -> String {
        format!("{}/{}", self.return_base_url, path.trim_start_matches('/'))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
