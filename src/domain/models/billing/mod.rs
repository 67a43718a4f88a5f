//! Stripe API 응답 모델
//!
//! 필요한 필드만 역직렬화합니다. 나머지 필드는 serde가 무시합니다.

use serde::{Deserialize, Serialize};

/// Stripe 고객 (`cus_...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeCustomer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// 빌링 포털 세션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSession {
    pub id: String,
    pub url: String,
}

/// Stripe 목록 응답 (`{"object": "list", "data": [...]}`)
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeSubscription {
    pub id: String,
    pub items: StripeList<StripeSubscriptionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeSubscriptionItem {
    pub id: String,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Stripe 에러 응답 (`{"error": {"type": ..., "message": ...}}`)
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_list_deserialize() {
        let body = serde_json::json!({
            "object": "list",
            "data": [{
                "id": "sub_1",
                "object": "subscription",
                "items": {
                    "object": "list",
                    "data": [{ "id": "si_1", "quantity": 3 }],
                    "has_more": false
                }
            }],
            "has_more": false
        });

        let list: StripeList<StripeSubscription> = serde_json::from_value(body).unwrap();
        assert_eq!(list.data[0].items.data[0].id, "si_1");
        assert_eq!(list.data[0].items.data[0].quantity, Some(3));
    }

    #[test]
    fn test_error_body_deserialize() {
        let body = r#"{"error": {"type": "invalid_request_error", "message": "No such customer: 'cus_x'"}}"#;
        let parsed: StripeErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.error.kind.as_deref(), Some("invalid_request_error"));
        assert!(parsed.error.message.unwrap().contains("No such customer"));
        assert!(parsed.error.code.is_none());
    }
}
