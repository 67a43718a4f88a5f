//! 결제(Stripe) 및 요금제 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! export STRIPE_SECRET_KEY="sk_live_..."
//! export STRIPE_API_BASE="https://api.stripe.com"     # 선택
//! export STRIPE_BILLING_RETURN_URL="https://app.example.com/settings"  # 선택
//! export BASIC_PLAN_ID="basic"                          # 선택
//! ```

use std::env;

/// 기본(basic) 요금제 ID
pub const BASIC_PLAN_ID: &str = "basic";

/// 새 사용자에게 만들어 주는 기본 워크스페이스 이름
pub const DEFAULT_WORKSPACE_NAME: &str = "My workspace";

pub struct StripeConfig;

impl StripeConfig {
    pub fn secret_key() -> String {
        env::var("STRIPE_SECRET_KEY")
            .expect("STRIPE_SECRET_KEY must be set")
    }

    pub fn api_base() -> String {
        env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 빌링 포털에서 돌아올 기본 URL. 요청에 Referer가 없을 때 사용합니다.
    pub fn default_return_url() -> Option<String> {
        env::var("STRIPE_BILLING_RETURN_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
    }
}

pub struct PlanSettings;

impl PlanSettings {
    /// 요금제 할당이 없는 사용자에게 적용할 요금제 ID
    pub fn basic_plan_id() -> String {
        env::var("BASIC_PLAN_ID").unwrap_or_else(|_| BASIC_PLAN_ID.to_string())
    }
}
