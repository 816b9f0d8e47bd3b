pub mod checkout_service;
pub mod dto;
pub mod extension_registry;

pub use checkout_service::CheckoutService;
pub use dto::{
    ErrorResponse, PaymentDataRequest, PaymentDataResponse, PaymentMethodOptionsResponse,
};
pub use extension_registry::{ExtensionRegistry, ExtensionRegistryBuilder};
