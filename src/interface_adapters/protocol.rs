use serde::Serialize;
use std::collections::BTreeMap;

// Typed error body: `{date, error, message, status}` with epoch-millis date.
#[derive(Debug, Serialize)]
pub struct TypedErrorBody {
    pub date: i64,
    pub error: String,
    pub message: Option<String>,
    pub status: u16,
}

// Generic error body: a flat map keyed `Date`, `Error`, `Message`, `Status`.
pub type GenericErrorBody = BTreeMap<&'static str, Option<String>>;

// Body used when a failure escapes without being dispatched.
#[derive(Debug, Serialize)]
pub struct InternalErrorBody {
    pub message: String,
}
