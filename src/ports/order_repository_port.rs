use crate::domain::errors::DomainResult;
use crate::domain::CommerceOrder;
use async_trait::async_trait;

/// 订单仓储端口接口（只读）
#[async_trait]
pub trait OrderRepositoryPort: Send + Sync {
    /// 根据订单ID查找
    async fn find_by_id(&self, order_id: i64) -> DomainResult<Option<CommerceOrder>>;
}
