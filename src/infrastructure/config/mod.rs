pub mod sbpayment_config;
pub mod site_config;

pub use sbpayment_config::{method_label, SbpaymentConfig};
pub use site_config::SiteConfig;
