use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 외부 인증 프로바이더 계정 연결 (`user_credentials` 컬렉션)
///
/// (`provider`, `provider_user_id`) 조합은 유니크합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCredential {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub provider: AuthProvider,
    pub provider_user_id: String,
    pub created_at: DateTime,
}

impl UserCredential {
    pub fn new(user_id: ObjectId, provider: AuthProvider, provider_user_id: String) -> Self {
        Self {
            id: None,
            user_id,
            provider,
            provider_user_id,
            created_at: DateTime::now(),
        }
    }
}
