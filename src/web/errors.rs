use crate::client::ClientError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BackendError(ClientError),
    TemplateError(String),
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::BackendError(_) => StatusCode::BAD_GATEWAY,
            WebError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BackendError(e) => write!(f, "{}", e),
            WebError::TemplateError(msg) => write!(f, "Template error: {}", msg),
        }
    }
}

impl Error for WebError {}

impl From<ClientError> for WebError {
    fn from(e: ClientError) -> Self {
        WebError::BackendError(e)
    }
}

impl From<minijinja::Error> for WebError {
    fn from(e: minijinja::Error) -> Self {
        WebError::TemplateError(e.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({
            "status": status.as_u16(),
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
