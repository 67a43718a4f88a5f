use mongodb::bson::{doc, DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 프로필 부분 수정 요청
///
/// 값이 있는 필드만 `$set`에 포함됩니다. `updated_at`은 항상 갱신됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "성은 100자 이하여야 합니다"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[validate(url(message = "프로필 이미지는 URL이어야 합니다"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.picture.is_none()
    }

    /// MongoDB `$set` 문서로 변환합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! { "updated_at": DateTime::now() };

        if let Some(ref first_name) = self.first_name {
            set.insert("first_name", first_name);
        }
        if let Some(ref last_name) = self.last_name {
            set.insert("last_name", last_name);
        }
        if let Some(ref picture) = self.picture {
            set.insert("picture", picture);
        }

        set
    }
}
