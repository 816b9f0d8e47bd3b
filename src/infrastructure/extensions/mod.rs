//! 内置扩展

pub mod link_type_item_name;
pub mod mobile_carrier_bundle;

pub use link_type_item_name::LinkTypeItemName;
pub use mobile_carrier_bundle::{MobileCarrierBundle, MOBILE_BUNDLE_ID};

use crate::application::ExtensionRegistryBuilder;
use std::sync::Arc;

/// 注册所有内置扩展
pub fn register_builtin(builder: ExtensionRegistryBuilder) -> ExtensionRegistryBuilder {
    builder
        .payment_method_options_alter(Arc::new(MobileCarrierBundle), 0)
        .payment_data_alter(Arc::new(LinkTypeItemName), 0)
}
