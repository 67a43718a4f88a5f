use serde::{Deserialize, Serialize};

/// `GET /user/billing` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingUrlResponse {
    /// Stripe 빌링 포털 세션 URL
    pub url: String,
}
