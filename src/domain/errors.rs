use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 订单未找到
    #[error("Commerce order not found: {0}")]
    OrderNotFound(String),

    /// 支付方式不在可选列表中
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// 订单状态无效
    #[error("Invalid order status: {0}")]
    InvalidOrderStatus(String),

    /// 数据库错误
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// 文件读取错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 配置错误
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 领域结果类型
pub type DomainResult<T> = Result<T, DomainError>;
