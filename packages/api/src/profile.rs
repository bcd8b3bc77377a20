//! Profile endpoints. A profile is optional — accounts start without one
//! and the form creates it on first save.

use serde::Deserialize;

use crate::models::{Profile, ProfileDraft};
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    profile: Profile,
}

impl ApiClient {
    /// GET `/api/profile`; `None` when no profile has been created yet.
    pub async fn profile(&self, token: &str) -> Result<Option<Profile>, ApiError> {
        let request = self.http().get(self.url("/api/profile")).bearer_auth(token);
        match self.execute::<ProfileEnvelope>(request).await {
            Ok(body) => Ok(Some(body.profile)),
            Err(ApiError::Rejected { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// POST `/api/profile`.
    pub async fn create_profile(
        &self,
        token: &str,
        draft: &ProfileDraft,
    ) -> Result<Profile, ApiError> {
        let body: ProfileEnvelope = self
            .execute(
                self.http()
                    .post(self.url("/api/profile"))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        Ok(body.profile)
    }

    /// PUT `/api/profile`.
    pub async fn update_profile(
        &self,
        token: &str,
        draft: &ProfileDraft,
    ) -> Result<Profile, ApiError> {
        let body: ProfileEnvelope = self
            .execute(
                self.http()
                    .put(self.url("/api/profile"))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        Ok(body.profile)
    }

    /// DELETE `/api/profile` — removes the profile, not the account.
    pub async fn delete_profile(&self, token: &str) -> Result<(), ApiError> {
        self.execute_unit(
            self.http()
                .delete(self.url("/api/profile"))
                .bearer_auth(token),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_envelope_unwraps() {
        let body: ProfileEnvelope = serde_json::from_str(
            r#"{"profile":{"_id":"p1","user_id":"u1","first_name":"Ada","last_name":"L"}}"#,
        )
        .unwrap();
        assert_eq!(body.profile.first_name, "Ada");
    }
}
