use crate::domain::{CommerceOrder, PaymentData, PaymentMethodOptions, ServiceName};
use crate::ports::TranslatorPort;
use std::sync::Arc;

/// 扩展调用上下文：显式传入站点名称与翻译器，扩展不读取全局状态
#[derive(Debug, Clone)]
pub struct AlterContext {
    /// 站点名称
    pub site_name: String,

    pub translator: Arc<dyn TranslatorPort>,
}

impl AlterContext {
    pub fn new(site_name: impl Into<String>, translator: Arc<dyn TranslatorPort>) -> Self {
        Self {
            site_name: site_name.into(),
            translator,
        }
    }

    /// 翻译并替换占位符
    pub fn t(&self, source: &str, args: &[(&str, &str)]) -> String {
        self.translator.t(source, args)
    }
}

/// 支付方式选项修改扩展点
///
/// 每次生成结账支付方式列表时调用一次，在列表返回之前。
/// 扩展按注册顺序执行，每个扩展都能看到之前所有扩展的修改结果。
pub trait PaymentMethodOptionsAlter: Send + Sync {
    /// 扩展名称（用于配置启用与日志）
    fn name(&self) -> &str;

    /// 原位修改支付方式选项
    fn alter(&self, payment_method_options: &mut PaymentMethodOptions, ctx: &AlterContext);
}

/// 支付数据修改扩展点
///
/// 每次组装发往 SBPS 的支付数据时调用一次，在数据离开服务之前。
/// 子服务标识和订单都是只读的。
pub trait PaymentDataAlter: Send + Sync {
    /// 扩展名称（用于配置启用与日志）
    fn name(&self) -> &str;

    /// 原位修改支付数据
    fn alter(
        &self,
        data: &mut PaymentData,
        sbpayment_service_name: &ServiceName,
        order: &CommerceOrder,
        ctx: &AlterContext,
    );
}
