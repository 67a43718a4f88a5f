//! User Entity Implementation
//!
//! 계정 서비스의 사용자 문서(`users` 컬렉션)입니다.
//! 결제 제공자(Stripe)의 고객 ID를 함께 보관하여 빌링 포털과 구독 수량
//! 변경에 사용합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 유니크 인덱스(`email_unique`)가 걸려 있습니다.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Stripe 고객 ID (`cus_...`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        picture: Option<String>,
        stripe_customer_id: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            picture,
            stripe_customer_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// 결제 고객 ID가 있으면 반환합니다. 빈 문자열은 없는 것으로 취급합니다.
    pub fn billing_customer_id(&self) -> Option<&str> {
        self.stripe_customer_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}
