//! Identity provider lookup for the current user

use serde::Deserialize;

use erp_core::nav::{SessionInfo, UserRole};

use super::{ApiGateway, GatewayError, GatewayResult};

#[derive(Debug, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdentityUser {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
}

impl IdentityUser {
    pub(crate) fn into_session(self) -> SessionInfo {
        let role = match self.user_metadata.and_then(|m| m.role).as_deref() {
            Some("admin") => UserRole::Admin,
            _ => UserRole::Tenant,
        };
        SessionInfo {
            email: self.email,
            role,
            signed_in: true,
        }
    }
}

impl ApiGateway {
    /// `GET {auth_url}/auth/v1/user`. Without credentials the session is anonymous.
    pub async fn current_session(&self) -> GatewayResult<SessionInfo> {
        let config = self.config();
        let (Some(auth_url), Some(anon_key), Some(token)) =
            (&config.auth_url, &config.auth_anon_key, &config.access_token)
        else {
            return Ok(SessionInfo::default());
        };

        let response = self
            .http
            .get(format!("{}/auth/v1/user", auth_url))
            .header("apikey", anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        match Self::decode::<IdentityUser>(response).await {
            Ok(user) => Ok(user.into_session()),
            // Expired or revoked token
            Err(GatewayError::Status { status: 401 | 403, .. }) => Ok(SessionInfo::default()),
            Err(e) => Err(e),
        }
    }
}
