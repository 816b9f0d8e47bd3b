use crate::domain::{CommerceOrder, PaymentData, ServiceName};
use crate::ports::{AlterContext, PaymentDataAlter};

/// 链接型购买请求中，以站点名称作为商品名
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTypeItemName;

impl LinkTypeItemName {
    pub const NAME: &'static str = "link_type_item_name";
}

impl PaymentDataAlter for LinkTypeItemName {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn alter(
        &self,
        data: &mut PaymentData,
        sbpayment_service_name: &ServiceName,
        _order: &CommerceOrder,
        ctx: &AlterContext,
    ) {
        if !sbpayment_service_name.is_link_type() {
            return;
        }

        let item_name = ctx.t(
            "Order from @site_name",
            &[("@site_name", ctx.site_name.as_str())],
        );
        data.insert("item_name", item_name);
    }
}
