use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
