//! Registration and login form submission against the auth endpoints.

use reqwest::{Client, Response};
use serde::Serialize;
use shared::{
    error::ApiErrorBody,
    protocol::{
        LoginRequest, LoginResponse, RegisterRequest, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH,
    },
};
use tracing::{info, warn};
use url::Url;

use crate::{
    error::{AuthAction, AuthError},
    AlertSink,
    loader::endpoint_url,
};

/// Page the browser is sent to after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    LoginAfterRegistration,
    Discover,
}

impl Redirect {
    pub fn path(self) -> &'static str {
        match self {
            Redirect::LoginAfterRegistration => "/login.html?registered",
            Redirect::Discover => "/discover.html",
        }
    }
}

pub struct AuthClient {
    http: Client,
    server_url: Url,
    token: Option<String>,
}

impl AuthClient {
    pub fn new(server_url: &str) -> Result<Self, AuthError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, AuthError> {
        let parsed = endpoint_url(server_url, "/").map_err(|source| AuthError::InvalidBaseUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http,
            server_url: parsed,
            token: None,
        })
    }

    /// Bearer token from the last successful login.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<Redirect, AuthError> {
        self.post(AuthAction::Register, REGISTER_PATH, form).await?;
        info!(email = %form.email, "registration accepted");
        Ok(Redirect::LoginAfterRegistration)
    }

    pub async fn login(&mut self, form: &LoginRequest) -> Result<Redirect, AuthError> {
        let res = self.post(AuthAction::Login, LOGIN_PATH, form).await?;
        let body: LoginResponse = res.json().await.map_err(|source| AuthError::Transport {
            action: AuthAction::Login,
            source,
        })?;
        self.token = Some(body.token);
        info!(email = %form.email, user_id = ?body.user_id, "login accepted");
        Ok(Redirect::Discover)
    }

    /// Ends the server session and forgets the stored token, even when the server call fails.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        let token = self.token.take();
        let url = self.url(AuthAction::Logout, LOGOUT_PATH)?;
        let mut req = self.http.post(url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req.send().await.map_err(|source| AuthError::Transport {
            action: AuthAction::Logout,
            source,
        })?;
        check_status(AuthAction::Logout, res).await?;
        Ok(())
    }

    fn url(&self, action: AuthAction, path: &str) -> Result<Url, AuthError> {
        self.server_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| AuthError::InvalidEndpoint { action, source })
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        action: AuthAction,
        path: &str,
        body: &T,
    ) -> Result<Response, AuthError> {
        let url = self.url(action, path)?;
        let res = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| AuthError::Transport { action, source })?;
        check_status(action, res).await
    }
}

async fn check_status(action: AuthAction, res: Response) -> Result<Response, AuthError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.json::<ApiErrorBody>().await.unwrap_or_default();
    let message = body.user_message().map(str::to_string);
    warn!(?action, status = status.as_u16(), ?message, "auth request rejected");
    Err(AuthError::Rejected {
        action,
        status: status.as_u16(),
        message,
    })
}

/// Submits the registration form. Failures are surfaced as a single alert and yield no redirect.
pub async fn submit_registration(
    client: &AuthClient,
    form: &RegisterRequest,
    alerts: &mut dyn AlertSink,
) -> Option<Redirect> {
    match client.register(form).await {
        Ok(redirect) => Some(redirect),
        Err(err) => {
            alerts.alert(&err.alert_message());
            None
        }
    }
}

/// Submits the login form. Failures are surfaced as a single alert and yield no redirect.
pub async fn submit_login(
    client: &mut AuthClient,
    form: &LoginRequest,
    alerts: &mut dyn AlertSink,
) -> Option<Redirect> {
    match client.login(form).await {
        Ok(redirect) => Some(redirect),
        Err(err) => {
            alerts.alert(&err.alert_message());
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
