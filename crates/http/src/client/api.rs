//! JSON helpers and typed endpoints on top of the authenticated flow

use super::error::ClientError;
use super::{ApiRequest, AuthenticatedClient};
use crate::types::UserProfile;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const PROFILE_PATH: &str = "/api/users/profile";

impl AuthenticatedClient {
    /// Send a request and decode the JSON response body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, ClientError> {
        let Some(response) = self.request(request).await? else {
            return Ok(None);
        };

        let text = response.text().await?;
        // Empty bodies (e.g. 204) decode as JSON null
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(Some(serde_json::from_str(body)?))
    }

    /// `GET` with query parameters
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ClientError> {
        let request = params
            .iter()
            .fold(ApiRequest::get(path), |request, (key, value)| {
                request.query(*key, *value)
            });
        self.execute(request).await
    }

    /// `POST` a JSON body
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::post(path).json(body)?).await
    }

    /// `PUT` a JSON body
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::put(path).json(body)?).await
    }

    /// `DELETE`, ignoring any response body
    pub async fn delete(&self, path: &str) -> Result<Option<()>, ClientError> {
        Ok(self.request(ApiRequest::delete(path)).await?.map(|_| ()))
    }

    /// Profile of the signed-in user.
    ///
    /// `None` when nobody is signed in, the session expired, or the call
    /// failed; failures are logged.
    pub async fn current_user_profile(&self) -> Option<UserProfile> {
        if self.session().access_token().is_none() {
            return None;
        }

        match self.get_json::<UserProfile>(PROFILE_PATH, &[]).await {
            Ok(profile) => profile,
            Err(e) => {
                error!(error = %e, "failed to load user profile");
                None
            }
        }
    }

    /// Id of the signed-in user
    pub async fn current_user_id(&self) -> Option<i64> {
        self.current_user_profile()
            .await
            .map(|profile| profile.user_id)
    }
}
