//! # 가입 요청 DTO
//!
//! 사용자 계정 생성에 필요한 입력입니다. 외부 프로바이더(Google, GitHub)로
//! 가입하는 경우 [`ProviderInfo`]가 함께 전달되어 자격 증명 문서가 만들어집니다.
//!
//! ## 검증 규칙
//!
//! - `email`: RFC 5322 형식. 중복 여부는 저장소의 유니크 인덱스가 판정합니다.
//! - `first_name`: 1-100자
//! - `last_name`: 0-100자
//! - `picture`: 있으면 URL 형식

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::config::AuthProvider;
use crate::domain::entities::users::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "성은 100자 이하여야 합니다"))]
    #[serde(default)]
    pub last_name: String,

    #[validate(url(message = "프로필 이미지는 URL이어야 합니다"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl SignupRequest {
    /// 결제 고객 ID를 붙여 저장할 사용자 엔티티를 만듭니다.
    pub fn into_user(self, stripe_customer_id: Option<String>) -> User {
        User::new(
            self.email,
            self.first_name,
            self.last_name,
            self.picture,
            stripe_customer_id,
        )
    }
}

/// 외부 인증 프로바이더 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub provider: AuthProvider,
    pub provider_user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            picture: None,
        }
    }

    #[test]
    fn test_valid_signup() {
        assert!(signup("ada@example.com").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let errors = signup("not-an-email").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_invalid_picture_rejected() {
        let mut request = signup("ada@example.com");
        request.picture = Some("nope".to_string());

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("picture"));
    }

    #[test]
    fn test_into_user_carries_customer_id() {
        let user = signup("ada@example.com").into_user(Some("cus_1".to_string()));

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.stripe_customer_id.as_deref(), Some("cus_1"));
        assert!(user.id.is_none());
    }
}
