use crate::domain::PaymentMethodOptions;
use crate::ports::{AlterContext, PaymentMethodOptionsAlter};

/// 三家运营商的机器名
const CARRIERS: [&str; 3] = ["docomo", "auone", "softbank2"];

/// SBPS 接受逗号分隔的 pay_method，合并后的机器名可直接提交
pub const MOBILE_BUNDLE_ID: &str = "docomo,auone,softbank2";

/// 将运营商代收选项合并为一个「手机支付」选项
///
/// 选项中没有任何运营商时不做修改，不会凭空加入合并选项。
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileCarrierBundle;

impl MobileCarrierBundle {
    pub const NAME: &'static str = "mobile_carrier_bundle";
}

impl PaymentMethodOptionsAlter for MobileCarrierBundle {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn alter(&self, payment_method_options: &mut PaymentMethodOptions, ctx: &AlterContext) {
        if !CARRIERS.iter().any(|id| payment_method_options.contains(id)) {
            return;
        }

        payment_method_options.insert(
            MOBILE_BUNDLE_ID,
            ctx.t("Pay by Mobile (Docomo, AU, SoftBank)", &[]),
        );
        for id in CARRIERS {
            payment_method_options.remove(id);
        }
    }
}
