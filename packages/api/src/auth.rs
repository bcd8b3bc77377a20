//! Authentication endpoints and the [`AuthApi`] wiring for the session layer.

use serde::{Deserialize, Serialize};
use session::{AuthApi, AuthApiError, AuthGrant, Identity, Role};

use crate::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct Registration<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Debug, Deserialize)]
struct GrantEnvelope {
    token: String,
    user: Identity,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: Identity,
}

impl ApiClient {
    /// POST `/api/auth/login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, ApiError> {
        let body: GrantEnvelope = self
            .execute(
                self.http()
                    .post(self.url("/api/auth/login"))
                    .json(&Credentials { email, password }),
            )
            .await?;
        Ok(AuthGrant {
            token: body.token,
            identity: body.user,
        })
    }

    /// POST `/api/auth/register`.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthGrant, ApiError> {
        let body: GrantEnvelope = self
            .execute(
                self.http()
                    .post(self.url("/api/auth/register"))
                    .json(&Registration {
                        email,
                        password,
                        role,
                    }),
            )
            .await?;
        Ok(AuthGrant {
            token: body.token,
            identity: body.user,
        })
    }

    /// GET `/api/auth/me` — the authoritative identity for a token.
    pub async fn current_identity(&self, token: &str) -> Result<Identity, ApiError> {
        let body: UserEnvelope = self
            .execute(self.http().get(self.url("/api/auth/me")).bearer_auth(token))
            .await?;
        Ok(body.user)
    }

    /// DELETE `/api/auth/delete` — remove the account behind the token.
    pub async fn delete_account(&self, token: &str) -> Result<(), ApiError> {
        self.execute_unit(
            self.http()
                .delete(self.url("/api/auth/delete"))
                .bearer_auth(token),
        )
        .await
    }
}

impl From<ApiError> for AuthApiError {
    fn from(err: ApiError) -> Self {
        AuthApiError {
            message: err.server_message().map(str::to_string),
        }
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, AuthApiError> {
        ApiClient::login(self, email, password)
            .await
            .map_err(Into::into)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthGrant, AuthApiError> {
        ApiClient::register(self, email, password, role)
            .await
            .map_err(Into::into)
    }

    async fn fetch_identity(&self, token: &str) -> Result<Identity, AuthApiError> {
        self.current_identity(token).await.map_err(Into::into)
    }

    async fn delete_account(&self, token: &str) -> Result<(), AuthApiError> {
        ApiClient::delete_account(self, token)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_envelope_decodes_login_response() {
        let body: GrantEnvelope = serde_json::from_str(
            r#"{"message":"Login successful","token":"t",
                "user":{"_id":"1","email":"a@b.com","role":"Student"}}"#,
        )
        .unwrap();
        assert_eq!(body.token, "t");
        assert_eq!(body.user.role, Role::Student);
    }

    #[test]
    fn registration_payload_spells_role_like_the_backend() {
        let json = serde_json::to_value(&Registration {
            email: "a@b.com",
            password: "pw",
            role: Role::Instructor,
        })
        .unwrap();
        assert_eq!(json["role"], "Instructor");
    }

    #[test]
    fn rejections_carry_their_message_into_auth_failures() {
        let err = ApiError::Rejected {
            status: 401,
            message: Some("Token is invalid or expired".to_string()),
        };
        let auth: AuthApiError = err.into();
        assert_eq!(auth.message.as_deref(), Some("Token is invalid or expired"));

        let bare = ApiError::Rejected {
            status: 500,
            message: None,
        };
        let auth: AuthApiError = bare.into();
        assert_eq!(auth.message, None);
    }
}
