//! User profile routes.

use reqwest::Method;

use crate::errors::ServiceError;
use crate::models::UserProfile;

use super::ApiClient;

const RESOURCE: &str = "profile";

impl ApiClient {
    pub async fn profile(&self) -> Result<UserProfile, ServiceError> {
        self.get_json("/user/profile", RESOURCE).await
    }

    /// Replace the signed-in user's profile and return the stored record.
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ServiceError> {
        self.send_json(Method::PUT, "/user/profile", profile, RESOURCE)
            .await
    }

    pub async fn delete_account(&self) -> Result<(), ServiceError> {
        self.delete("/user/profile", RESOURCE, "me").await
    }
}
