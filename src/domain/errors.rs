use std::num::ParseIntError;

use thiserror::Error;

// Closed set of failures a request handler may raise.
// Each kind stays distinct here; grouping for presentation happens in the dispatcher.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Failure {
    #[error("arithmetic fault: {}", display_message(.0))]
    DivisionByZero(Option<String>),
    #[error("route not found: {}", display_message(.0))]
    RouteNotFound(Option<String>),
    #[error("malformed numeric input: {}", display_message(.0))]
    InvalidNumber(Option<String>),
    #[error("null reference: {}", display_message(.0))]
    NullReference(Option<String>),
    #[error("serialization write fault: {}", display_message(.0))]
    SerializationWrite(Option<String>),
    #[error("user lookup miss: {}", display_message(.0))]
    UserNotFound(Option<String>),
}

impl Failure {
    pub fn user_not_found() -> Self {
        Failure::UserNotFound(Some("user does not exist".to_string()))
    }

    pub fn route_not_found(method: &str, path: &str) -> Self {
        Failure::RouteNotFound(Some(format!("No endpoint {method} {path}.")))
    }

    pub fn invalid_number(input: &str, err: &ParseIntError) -> Self {
        Failure::InvalidNumber(Some(format!("for input string \"{input}\": {err}")))
    }

    // Text carried by the failure, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Failure::DivisionByZero(message)
            | Failure::RouteNotFound(message)
            | Failure::InvalidNumber(message)
            | Failure::NullReference(message)
            | Failure::SerializationWrite(message)
            | Failure::UserNotFound(message) => message.as_deref(),
        }
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        Failure::SerializationWrite(Some(err.to_string()))
    }
}

fn display_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("<no message>")
}
