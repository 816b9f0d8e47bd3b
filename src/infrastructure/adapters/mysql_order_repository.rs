use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Money, OrderStatus};
use crate::domain::CommerceOrder;
use crate::ports::order_repository_port::OrderRepositoryPort;
use async_trait::async_trait;
use sqlx::{MySql, Pool};
use std::sync::Arc;
use tracing::debug;

/// MySQL订单仓储实现（只读）
#[derive(Clone)]
pub struct MySqlOrderRepository {
    pool: Arc<Pool<MySql>>,
}

impl MySqlOrderRepository {
    pub fn new(pool: Arc<Pool<MySql>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepositoryPort for MySqlOrderRepository {
    /// 根据订单ID查找
    async fn find_by_id(&self, order_id: i64) -> DomainResult<Option<CommerceOrder>> {
        let query = r#"
            SELECT order_id, order_number, uid, mail, status,
                   total_amount, currency_code, created
            FROM commerce_order
            WHERE order_id = ?
        "#;

        let row = sqlx::query_as::<_, CommerceOrderRow>(query)
            .bind(order_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let row = match row {
            Some(row) => row,
            None => {
                debug!("Commerce order not found in database: {}", order_id);
                return Ok(None);
            }
        };

        let line_items = r#"
            SELECT line_item_label
            FROM commerce_line_item
            WHERE order_id = ? AND type = 'product'
            ORDER BY line_item_id
        "#;

        let titles: Vec<String> = sqlx::query_scalar::<_, String>(line_items)
            .bind(order_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        debug!("Commerce order loaded: {} ({} line items)", order_id, titles.len());
        row.into_order(titles).map(Some)
    }
}

/// 数据库行结构体
#[derive(Debug, sqlx::FromRow)]
struct CommerceOrderRow {
    order_id: i64,
    order_number: String,
    uid: i64,
    mail: String,
    status: String,
    total_amount: i64,
    currency_code: String,
    created: chrono::DateTime<chrono::Utc>,
}

impl CommerceOrderRow {
    fn into_order(self, line_item_titles: Vec<String>) -> DomainResult<CommerceOrder> {
        let status: OrderStatus = self.status.parse()?;

        Ok(CommerceOrder {
            order_id: self.order_id,
            order_number: self.order_number,
            uid: self.uid,
            mail: self.mail,
            status,
            total: Money::from_minor_units(self.total_amount, self.currency_code),
            line_item_titles,
            created_at: self.created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> CommerceOrderRow {
        CommerceOrderRow {
            order_id: 12,
            order_number: "12".to_string(),
            uid: 3,
            mail: "buyer@example.jp".to_string(),
            status: status.to_string(),
            total_amount: 5400,
            currency_code: "JPY".to_string(),
            created: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_row_into_order() {
        let order = row("checkout_payment")
            .into_order(vec!["Matcha".to_string()])
            .unwrap();

        assert_eq!(order.status, OrderStatus::Checkout);
        assert_eq!(order.total, Money::from_yen(5400));
        assert_eq!(order.first_line_item_title(), Some("Matcha"));
    }

    #[test]
    fn test_row_with_unknown_status() {
        assert!(row("shipped").into_order(Vec::new()).is_err());
    }
}
