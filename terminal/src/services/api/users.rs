//! # User Endpoints

use super::client::ApiClient;
use crate::core::error::Result;
use reqwest::Method;
use shared::UserProfile;

pub const PROFILE_PATH: &str = "/users/me";

/// Profile of the authenticated user.
pub async fn get_profile(client: &ApiClient) -> Result<UserProfile> {
    let response = client.send(Method::GET, PROFILE_PATH, |builder| builder).await?;
    let profile = ApiClient::parse::<UserProfile>(response).await?;
    tracing::debug!(user_id = %profile.id, role = %profile.role, "Fetched profile");
    Ok(profile)
}
