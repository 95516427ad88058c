use crate::models::Mode;
use axum::{extract::multipart::MultipartError, http::StatusCode};
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        // keeps 413 for uploads over the body limit
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failures a submission can end in. None of them are retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("malformed {mode} response: {reason}")]
    MalformedResponse { mode: Mode, reason: String },
}

impl SubmitError {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::NoFileSelected => "NoFileSelected",
            SubmitError::RequestFailed { .. } => "RequestFailed",
            SubmitError::MalformedResponse { .. } => "MalformedResponse",
        }
    }

    /// Text shown in the mode/status display.
    pub fn status_message(&self) -> String {
        format!("ERROR {}: {self}", self.kind())
    }
}
