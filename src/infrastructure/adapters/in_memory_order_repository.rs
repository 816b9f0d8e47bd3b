use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::CommerceOrder;
use crate::ports::order_repository_port::OrderRepositoryPort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// 内存订单仓储（未配置数据库时，从订单夹具文件加载）
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<i64, CommerceOrder>>>,
}

impl InMemoryOrderRepository {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 订单数组加载
    pub fn from_file(path: &str) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let repository = Self::from_json(&content)?;
        info!(path, "Loaded order fixtures");
        Ok(repository)
    }

    fn from_json(content: &str) -> DomainResult<Self> {
        let list: Vec<CommerceOrder> = serde_json::from_str(content)?;

        let mut orders = HashMap::with_capacity(list.len());
        for order in list {
            let order = CommerceOrder {
                created_at: order.created_at,
                ..CommerceOrder::new(
                    order.order_id,
                    order.order_number,
                    order.uid,
                    order.mail,
                    order.status,
                    order.total,
                    order.line_item_titles,
                )?
            };
            if orders.insert(order.order_id, order).is_some() {
                return Err(DomainError::ValidationError(
                    "Duplicate order id in order fixtures".to_string(),
                ));
            }
        }

        info!(orders = orders.len(), "In-memory order repository ready");
        Ok(Self {
            orders: Arc::new(RwLock::new(orders)),
        })
    }

    /// 放入订单（相同ID覆盖）
    #[cfg(test)]
    pub async fn insert(&self, order: CommerceOrder) {
        self.orders.write().await.insert(order.order_id, order);
    }
}

#[async_trait]
impl OrderRepositoryPort for InMemoryOrderRepository {
    async fn find_by_id(&self, order_id: i64) -> DomainResult<Option<CommerceOrder>> {
        Ok(self.orders.read().await.get(&order_id).cloned())
    }
}
