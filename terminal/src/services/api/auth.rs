//! # Authentication Endpoints
//!
//! Registration (JSON) and login (OAuth2 password form).

use super::client::ApiClient;
use crate::core::error::Result;
use reqwest::Method;
use shared::{AuthResponse, LoginForm, RegisterRequest};

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";

/// Create an account.
#[tracing::instrument(skip(client, request), fields(username = %request.username, email = %request.email))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting registration");
    let start = std::time::Instant::now();

    let response = client
        .send(Method::POST, REGISTER_PATH, |builder| builder.json(request))
        .await?;
    let auth = ApiClient::parse::<AuthResponse>(response).await?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Registration successful");
    Ok(auth)
}

/// Login with email and password.
///
/// Sent as `application/x-www-form-urlencoded` with `grant_type=password`; the email travels under
/// the `username` key.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let form = LoginForm::password_grant(email, password);
    let response = client
        .send(Method::POST, LOGIN_PATH, |builder| builder.form(&form))
        .await?;
    let auth = ApiClient::parse::<AuthResponse>(response).await?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(auth)
}
