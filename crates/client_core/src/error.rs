//! Error taxonomy for catalog retrieval and auth form submission.
//!
//! Filtering and rendering have no error type: both are total over well-formed courses.

use thiserror::Error;

pub const REGISTER_FALLBACK_MESSAGE: &str = "An error occurred during registration.";
pub const LOGIN_FALLBACK_MESSAGE: &str = "An error occurred during login.";
pub const LOGOUT_FALLBACK_MESSAGE: &str = "An error occurred during logout.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid server url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach course endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("course endpoint returned status {status}")]
    Status { status: u16 },
    #[error("malformed course collection: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("course catalog failed to load earlier; no retry is attempted")]
    AlreadyFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
    Logout,
}

impl AuthAction {
    pub fn fallback_message(self) -> &'static str {
        match self {
            AuthAction::Register => REGISTER_FALLBACK_MESSAGE,
            AuthAction::Login => LOGIN_FALLBACK_MESSAGE,
            AuthAction::Logout => LOGOUT_FALLBACK_MESSAGE,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid server url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("{action:?} endpoint could not be built: {source}")]
    InvalidEndpoint {
        action: AuthAction,
        source: url::ParseError,
    },
    #[error("{action:?} request failed: {source}")]
    Transport {
        action: AuthAction,
        source: reqwest::Error,
    },
    #[error("{action:?} rejected with status {status}")]
    Rejected {
        action: AuthAction,
        status: u16,
        message: Option<String>,
    },
}

impl AuthError {
    /// The submission that failed. `None` when the client could not be constructed.
    pub fn action(&self) -> Option<AuthAction> {
        match self {
            AuthError::InvalidBaseUrl { .. } => None,
            AuthError::InvalidEndpoint { action, .. }
            | AuthError::Transport { action, .. }
            | AuthError::Rejected { action, .. } => Some(*action),
        }
    }

    /// Text shown to the user: the server message when one was supplied, else the
    /// failed action's literal fallback.
    pub fn alert_message(&self) -> String {
        match self {
            AuthError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            other => match other.action() {
                Some(action) => action.fallback_message().to_string(),
                None => other.to_string(),
            },
        }
    }
}
