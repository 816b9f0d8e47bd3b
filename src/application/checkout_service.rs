use crate::application::ExtensionRegistry;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{CommerceOrder, PaymentData, PaymentMethodOptions, ServiceName};
use crate::infrastructure::config::{method_label, SbpaymentConfig};
use crate::ports::{AlterContext, OrderRepositoryPort};
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// SBPS 要求 request_date 使用日本标准时间
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// 结账服务：组装默认数据并调用已注册的扩展
pub struct CheckoutService<R: OrderRepositoryPort> {
    repository: Arc<R>,
    registry: Arc<ExtensionRegistry>,
    sbpayment: Arc<SbpaymentConfig>,
    ctx: AlterContext,
}

impl<R: OrderRepositoryPort> CheckoutService<R> {
    pub fn new(
        repository: Arc<R>,
        registry: Arc<ExtensionRegistry>,
        sbpayment: Arc<SbpaymentConfig>,
        ctx: AlterContext,
    ) -> Self {
        Self {
            repository,
            registry,
            sbpayment,
            ctx,
        }
    }

    /// 生成结账页面的支付方式选项
    pub fn payment_method_options(&self) -> PaymentMethodOptions {
        let mut options = PaymentMethodOptions::new();
        for id in &self.sbpayment.enabled_methods {
            if let Some(label) = method_label(id) {
                options.insert(id.as_str(), self.ctx.t(label, &[]));
            }
        }

        self.registry
            .alter_payment_method_options(&mut options, &self.ctx);

        if options.is_empty() {
            warn!("No SBPS payment method options left after alteration");
        }
        debug!("Payment method options: {:?}", options.keys().collect::<Vec<_>>());

        options
    }

    /// 生成发往 SBPS 的支付数据
    pub async fn payment_data(
        &self,
        order_id: i64,
        sbpayment_service_name: &ServiceName,
        pay_method: &str,
    ) -> DomainResult<PaymentData> {
        info!(
            "Building {} payment data for order: {}",
            sbpayment_service_name, order_id
        );

        if !sbpayment_service_name.is_link_type() {
            return Err(DomainError::ValidationError(format!(
                "Unsupported SBPS service: {}",
                sbpayment_service_name
            )));
        }

        // 1. 校验支付方式
        if !self.payment_method_options().contains(pay_method) {
            return Err(DomainError::UnknownPaymentMethod(pay_method.to_string()));
        }

        // 2. 加载订单
        let order = self
            .repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::OrderNotFound(order_id.to_string()))?;

        if !order.status.is_in_checkout() {
            return Err(DomainError::InvalidOrderStatus(order.status.to_string()));
        }

        // 3. 组装默认数据
        let jst = FixedOffset::east_opt(JST_OFFSET_SECONDS)
            .ok_or_else(|| DomainError::InternalError("Invalid JST offset".to_string()))?;
        let mut data = self.build_link_type_data(&order, pay_method, Utc::now().with_timezone(&jst));

        // 4. 调用扩展
        self.registry
            .alter_payment_data(&mut data, sbpayment_service_name, &order, &self.ctx);

        info!(
            "Payment data built for order {}: {} fields",
            order.order_id,
            data.len()
        );

        Ok(data)
    }

    /// 链接型购买请求的默认字段
    fn build_link_type_data(
        &self,
        order: &CommerceOrder,
        pay_method: &str,
        now: DateTime<FixedOffset>,
    ) -> PaymentData {
        let item_name = match order.first_line_item_title() {
            Some(title) => title.to_string(),
            None => self
                .ctx
                .t("Order @number", &[("@number", order.order_number.as_str())]),
        };

        let mut data = PaymentData::new();
        data.insert("pay_method", pay_method);
        data.insert("merchant_id", self.sbpayment.merchant_id.as_str());
        data.insert("service_id", self.sbpayment.service_id.as_str());
        data.insert("cust_code", order.customer_code());
        data.insert("order_id", order.order_number.as_str());
        data.insert("item_id", self.sbpayment.item_id.as_str());
        data.insert("item_name", item_name);
        data.insert("amount", order.total.to_minor_units());
        data.insert("pay_type", "0");
        data.insert("service_type", "0");
        data.insert("terminal_type", "0");
        data.insert(
            "success_url",
            self.sbpayment
                .return_url(&format!("sbpayment/{}/success", order.order_id)),
        );
        data.insert(
            "cancel_url",
            self.sbpayment
                .return_url(&format!("sbpayment/{}/cancel", order.order_id)),
        );
        data.insert(
            "error_url",
            self.sbpayment
                .return_url(&format!("sbpayment/{}/error", order.order_id)),
        );
        data.insert("pagecon_url", self.sbpayment.return_url("sbpayment/notify"));
        data.insert("request_date", now.format("%Y%m%d%H%M%S").to_string());
        data.insert("limit_second", self.sbpayment.limit_second);
        data
    }
}
