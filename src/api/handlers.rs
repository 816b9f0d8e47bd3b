use crate::application::{
    CheckoutService, ErrorResponse, PaymentDataRequest, PaymentDataResponse,
    PaymentMethodOptionsResponse,
};
use crate::domain::errors::DomainError;
use crate::ports::OrderRepositoryPort;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// 应用状态
pub struct AppState<R: OrderRepositoryPort> {
    pub checkout_service: Arc<CheckoutService<R>>,
}

impl<R: OrderRepositoryPort> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            checkout_service: self.checkout_service.clone(),
        }
    }
}

/// 领域错误转换为 HTTP 响应
fn error_response(code: &str, e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        DomainError::OrderNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::ValidationError(_) | DomainError::UnknownPaymentMethod(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::InvalidOrderStatus(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("{} error: {}", code, e);
    } else {
        warn!("{} error: {}", code, e);
    }

    (status, Json(ErrorResponse::new(code.to_string(), e.to_string())))
}

/// 结账支付方式选项
pub async fn payment_method_options<R: OrderRepositoryPort>(
    State(state): State<AppState<R>>,
) -> impl IntoResponse {
    info!("Received payment method options request");

    let options = state.checkout_service.payment_method_options();
    (StatusCode::OK, Json(PaymentMethodOptionsResponse::from(options)))
}

/// 生成支付数据
pub async fn payment_data<R: OrderRepositoryPort>(
    State(state): State<AppState<R>>,
    Path(order_id): Path<i64>,
    Json(request): Json<PaymentDataRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Received payment data request for order {} ({})",
        order_id, request.service_name
    );

    state
        .checkout_service
        .payment_data(order_id, &request.service_name, &request.pay_method)
        .await
        .map(|data| {
            let response = PaymentDataResponse {
                order_id,
                service_name: request.service_name.clone(),
                data,
            };
            (StatusCode::OK, Json(response)).into_response()
        })
        .map_err(|e| error_response("PAYMENT_DATA_ERROR", e))
}

/// 健康检查
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
