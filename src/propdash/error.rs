use crate::model::{ContactId, PaymentId, PropertyId};
use crate::validation::FormErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropdashError {
    #[error("Property not found: {0}")]
    PropertyNotFound(PropertyId),

    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    /// A bulk action was dispatched with nothing selected. Raised locally,
    /// before the store is consulted.
    #[error("No properties selected")]
    EmptySelection,

    /// A bulk action was dispatched while a previous one was still
    /// outstanding.
    #[error("A bulk action is already in progress")]
    ActionInFlight,

    #[error("Invalid property form: {0}")]
    InvalidForm(FormErrors),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PropdashError>;
