use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 商城订单（只读引用，由宿主系统持有）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommerceOrder {
    /// 订单ID
    pub order_id: i64,

    /// 订单编号
    pub order_number: String,

    /// 下单用户ID（0 为匿名用户）
    pub uid: i64,

    /// 下单邮箱
    pub mail: String,

    /// 订单状态
    pub status: OrderStatus,

    /// 订单总额
    pub total: Money,

    /// 商品行标题
    #[serde(default)]
    pub line_item_titles: Vec<String>,

    /// 创建时间
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl CommerceOrder {
    /// 创建订单引用
    pub fn new(
        order_id: i64,
        order_number: String,
        uid: i64,
        mail: String,
        status: OrderStatus,
        total: Money,
        line_item_titles: Vec<String>,
    ) -> DomainResult<Self> {
        if order_id <= 0 {
            return Err(DomainError::ValidationError(
                "Order id must be greater than 0".to_string(),
            ));
        }

        if order_number.is_empty() {
            return Err(DomainError::ValidationError(
                "Order number must not be empty".to_string(),
            ));
        }

        if total.to_minor_units() < 0 {
            return Err(DomainError::ValidationError(
                "Order total must not be negative".to_string(),
            ));
        }

        Ok(Self {
            order_id,
            order_number,
            uid,
            mail,
            status,
            total,
            line_item_titles,
            created_at: Utc::now(),
        })
    }

    /// 是否为匿名订单
    pub fn is_anonymous(&self) -> bool {
        self.uid == 0
    }

    /// 顾客编码：登录用户使用 uid，匿名用户使用邮箱
    pub fn customer_code(&self) -> String {
        if self.is_anonymous() {
            self.mail.clone()
        } else {
            self.uid.to_string()
        }
    }

    pub fn first_line_item_title(&self) -> Option<&str> {
        self.line_item_titles.first().map(String::as_str)
    }
}
