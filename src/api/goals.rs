//! Goal routes.

use reqwest::Method;

use crate::errors::ServiceError;
use crate::models::{Goal, GoalDraft};

use super::ApiClient;

const RESOURCE: &str = "goals";

impl ApiClient {
    /// Fetch every goal for the signed-in user.
    pub async fn goals(&self) -> Result<Vec<Goal>, ServiceError> {
        self.get_json("/goals", RESOURCE).await
    }

    /// Fetch one goal by id.
    pub async fn goal(&self, id: &str) -> Result<Goal, ServiceError> {
        self.get_json_by_id(&format!("/goals/{id}"), RESOURCE, id)
            .await
    }

    /// Create a goal and return the stored record.
    pub async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, ServiceError> {
        self.send_json(Method::POST, "/goals", draft, RESOURCE).await
    }

    /// Replace a goal's mutable fields and return the stored record.
    pub async fn update_goal(&self, id: &str, draft: &GoalDraft) -> Result<Goal, ServiceError> {
        self.send_json(Method::PUT, &format!("/goals/{id}"), draft, RESOURCE)
            .await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<(), ServiceError> {
        self.delete(&format!("/goals/{id}"), RESOURCE, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Goal, GoalStatus};

    #[test]
    fn test_goal_list_payload_deserializes() {
        let payload = r#"[
            {
                "id": "g-1",
                "title": "Run a marathon",
                "description": "26.2 miles before winter",
                "current": 12,
                "target": 26.2,
                "status": "in-progress",
                "priority": 3,
                "deadline": "2026-11-01",
                "createdAt": "2026-01-15T08:30:00Z"
            }
        ]"#;

        let goals: Vec<Goal> = serde_json::from_str(payload).unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].status, GoalStatus::InProgress);
        assert_eq!(goals[0].priority, 3);
        assert_eq!(goals[0].target, 26.2);
    }
}
