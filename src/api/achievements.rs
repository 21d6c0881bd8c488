//! Achievement routes.

use reqwest::Method;

use crate::errors::ServiceError;
use crate::models::{Achievement, AchievementDraft};

use super::ApiClient;

const RESOURCE: &str = "achievements";

impl ApiClient {
    /// Fetch every achievement for the signed-in user.
    pub async fn achievements(&self) -> Result<Vec<Achievement>, ServiceError> {
        self.get_json("/achievements", RESOURCE).await
    }

    /// Fetch one achievement by id.
    pub async fn achievement(&self, id: &str) -> Result<Achievement, ServiceError> {
        self.get_json_by_id(&format!("/achievements/{id}"), RESOURCE, id)
            .await
    }

    /// Create an achievement and return the stored record.
    pub async fn create_achievement(
        &self,
        draft: &AchievementDraft,
    ) -> Result<Achievement, ServiceError> {
        self.send_json(Method::POST, "/achievements", draft, RESOURCE)
            .await
    }

    /// Replace an achievement's mutable fields and return the stored record.
    pub async fn update_achievement(
        &self,
        id: &str,
        draft: &AchievementDraft,
    ) -> Result<Achievement, ServiceError> {
        self.send_json(Method::PUT, &format!("/achievements/{id}"), draft, RESOURCE)
            .await
    }

    pub async fn delete_achievement(&self, id: &str) -> Result<(), ServiceError> {
        self.delete(&format!("/achievements/{id}"), RESOURCE, id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Achievement, AchievementCategory};

    #[test]
    fn test_achievement_list_payload_deserializes() {
        let payload = r#"[
            {
                "id": "a-1",
                "title": "First 10k",
                "description": "Ran the river loop without stopping",
                "category": "health",
                "significance": 4,
                "date": "2026-03-02"
            }
        ]"#;

        let achievements: Vec<Achievement> = serde_json::from_str(payload).unwrap();
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements[0].category, AchievementCategory::Health);
        assert_eq!(achievements[0].significance, 4);
    }
}
