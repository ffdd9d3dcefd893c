use displaydoc::Display;
use thiserror::Error;

use crate::form;
use crate::stripe::ApiError;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Stripe API error: {0}
    Api(Box<ApiError>),
    /// HTTP request failed: {0}
    Http(#[from] reqwest::Error),
    /// Could not decode response (status {status}) at `{path}`: {source}; body: {sample}
    Decode {
        status: u16,
        /// Dotted path of the field that failed, `.` for the top level.
        path: String,
        sample: String,
        #[source]
        source: serde_json::Error,
    },
    /// Could not encode request parameters: {0}
    Form(#[from] form::Error),
    /// Idempotency key is {0} characters long, at most 255 are allowed.
    IdempotencyKeyTooLong(usize),
    /// Header `{0}` has an invalid name or value.
    InvalidHeader(String),
    /// Environment variable {0} is not set.
    MissingEnv(&'static str),
    /// Unexpected response (status {status}): {body}
    Unexpected { status: u16, body: String },
}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        Error::Api(Box::new(error))
    }
}

impl Error {
    /// The API error behind this error, if Stripe returned one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}
