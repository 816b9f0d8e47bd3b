pub mod extension_port;
pub mod order_repository_port;
pub mod translator_port;

pub use extension_port::{AlterContext, PaymentDataAlter, PaymentMethodOptionsAlter};
pub use order_repository_port::OrderRepositoryPort;
pub use translator_port::TranslatorPort;
