//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Recipients, SendRcs};
pub use response::{SendOutcome, SendResult};
pub use validation::ConfigurationError;
pub use value::{
    AppId, AuthorizationToken, Credentials, DeliveryReport, KeyId, KeySecret, MessageText,
    ProjectId, RecipientAddress,
};
