use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain `{ "message": ... }` acknowledgement returned by delete-like endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// `{ "message": ..., "data": ... }` envelope used by update endpoints of the admin console.
#[derive(Serialize, Debug, Clone)]
pub struct MessageWithData<T> {
    pub message: String,
    pub data: T,
}

impl<T> MessageWithData<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self { message: message.into(), data }
    }
}
