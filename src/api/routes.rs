use super::handlers::*;
use crate::ports::OrderRepositoryPort;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub fn create_router<R: OrderRepositoryPort + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/checkout/payment-methods",
            get(payment_method_options::<R>),
        )
        .route(
            "/api/checkout/orders/:order_id/payment-data",
            post(payment_data::<R>),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
