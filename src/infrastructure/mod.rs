pub mod adapters;
pub mod config;
pub mod extensions;
pub mod i18n;

pub use adapters::{InMemoryOrderRepository, MySqlOrderRepository};
pub use config::{SbpaymentConfig, SiteConfig};
pub use i18n::Translator;
