pub mod entities;
pub mod errors;
pub mod payment_data;
pub mod payment_options;
pub mod value_objects;

pub use entities::CommerceOrder;
pub use errors::{DomainError, DomainResult};
pub use payment_data::{PaymentData, PaymentDataValue};
pub use payment_options::PaymentMethodOptions;
pub use value_objects::{Money, OrderStatus, ServiceName};
