//! 결제 제공자 연동
//!
//! 서비스 계층은 [`BillingGateway`] trait에만 의존하고,
//! 운영 환경에서는 [`StripeService`](stripe_service::StripeService)를 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let billing: Arc<dyn BillingGateway> = Arc::new(StripeService::from_env());
//! let customer = billing.connect_or_create_customer("ada@example.com").await?;
//! let session = billing.create_billing_session(&customer.id, None).await?;
//! ```

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::models::billing::{BillingSession, StripeCustomer};

pub mod stripe_service;

pub use stripe_service::StripeService;

#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// 이메일로 기존 고객을 찾고, 없으면 새로 만듭니다.
    async fn connect_or_create_customer(&self, email: &str) -> AppResult<StripeCustomer>;

    /// 고객의 활성 구독 수량(좌석 수)을 변경합니다.
    async fn update_subscription_quantity(&self, customer_id: &str, quantity: i64) -> AppResult<()>;

    /// 호스팅된 빌링 포털 세션을 만듭니다.
    async fn create_billing_session(
        &self,
        customer_id: &str,
        return_url: Option<&str>,
    ) -> AppResult<BillingSession>;
}
