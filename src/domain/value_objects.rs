use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::DomainError;

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 购物车
    Cart,
    /// 结账中
    Checkout,
    /// 等待付款
    Pending,
    /// 处理中
    Processing,
    /// 已完成
    Completed,
    /// 已取消
    Canceled,
}

impl OrderStatus {
    /// 结账流程中的订单才能生成支付数据
    pub fn is_in_checkout(&self) -> bool {
        matches!(self, OrderStatus::Cart | OrderStatus::Checkout | OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Cart => write!(f, "cart"),
            OrderStatus::Checkout => write!(f, "checkout"),
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 结账子状态（checkout_review、checkout_payment 等）统一视为 Checkout
        if s.starts_with("checkout") {
            return Ok(OrderStatus::Checkout);
        }
        match s {
            "cart" => Ok(OrderStatus::Cart),
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            "canceled" => Ok(OrderStatus::Canceled),
            other => Err(DomainError::InvalidOrderStatus(other.to_string())),
        }
    }
}

/// 订单金额（最小货币单位，JPY 即为日元）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// 金额（最小货币单位）
    pub amount: i64,

    /// ISO 4217 货币代码
    pub currency_code: String,
}

impl Money {
    /// 创建日元金额
    pub fn from_yen(amount: i64) -> Self {
        Self {
            amount,
            currency_code: "JPY".to_string(),
        }
    }

    /// 按最小货币单位创建
    pub fn from_minor_units(amount: i64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    pub fn to_minor_units(&self) -> i64 {
        self.amount
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency_code.as_str() {
            "JPY" => write!(f, "¥{}", self.amount),
            code => write!(f, "{} {}", self.amount, code),
        }
    }
}

/// SBPS 子服务标识（决定支付数据的组装方式）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// 链接型购买请求
    pub const LINK_TYPE: &'static str = "link_type";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn link_type() -> Self {
        Self::new(Self::LINK_TYPE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_link_type(&self) -> bool {
        self.0 == Self::LINK_TYPE
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ServiceName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(format!("{}", Money::from_yen(1200)), "¥1200");
        assert_eq!(
            format!("{}", Money::from_minor_units(1050, "USD")),
            "1050 USD"
        );
    }

    #[test]
    fn test_order_status_parsing() {
        assert_eq!("cart".parse::<OrderStatus>().unwrap(), OrderStatus::Cart);
        assert_eq!(
            "checkout_review".parse::<OrderStatus>().unwrap(),
            OrderStatus::Checkout
        );
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!(OrderStatus::Pending.is_in_checkout());
        assert!(!OrderStatus::Completed.is_in_checkout());
    }

    #[test]
    fn test_service_name_link_type() {
        let service = ServiceName::link_type();
        assert!(service.is_link_type());
        assert_eq!(service, "link_type");
        assert!(!ServiceName::new("api_type").is_link_type());
    }
}
