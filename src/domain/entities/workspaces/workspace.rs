use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::DEFAULT_WORKSPACE_NAME;

/// 워크스페이스 (`workspaces` 컬렉션)
///
/// 개인 워크스페이스는 `owner_id`만, 팀 워크스페이스는 `team_id`도 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub owner_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<ObjectId>,
    pub created_at: DateTime,
}

impl Workspace {
    /// 가입 시 함께 만들어지는 개인 워크스페이스
    pub fn default_for(owner_id: ObjectId) -> Self {
        Self {
            id: None,
            name: DEFAULT_WORKSPACE_NAME.to_string(),
            owner_id,
            team_id: None,
            created_at: DateTime::now(),
        }
    }
}
