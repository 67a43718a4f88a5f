//! # Stripe 결제 게이트웨이
//!
//! Stripe REST API를 `reqwest`로 직접 호출합니다.
//! 요청 본문은 Stripe 규약대로 `application/x-www-form-urlencoded`이며,
//! 비밀 키는 Bearer 인증 헤더로 전달합니다.
//!
//! | 동작 | 엔드포인트 |
//! |------|------------|
//! | 고객 조회 | `GET /v1/customers?email=&limit=1` |
//! | 고객 생성 | `POST /v1/customers` (Idempotency-Key) |
//! | 활성 구독 조회 | `GET /v1/subscriptions?customer=&status=active&limit=1` |
//! | 수량 변경 | `POST /v1/subscription_items/{id}` |
//! | 빌링 포털 | `POST /v1/billing_portal/sessions` |
//!
//! 재시도와 타임아웃은 `reqwest` 기본값을 그대로 따릅니다.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use crate::config::StripeConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::billing::{
    BillingSession, StripeCustomer, StripeErrorResponse, StripeList, StripeSubscription,
};
use super::BillingGateway;

pub struct StripeService {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
    default_return_url: Option<String>,
}

impl StripeService {
    pub fn new(api_base: String, secret_key: String, default_return_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key,
            default_return_url,
        }
    }

    /// 환경 변수(`STRIPE_*`)로 구성합니다.
    pub fn from_env() -> Self {
        Self::new(
            StripeConfig::api_base(),
            StripeConfig::secret_key(),
            StripeConfig::default_return_url(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.api_base, path.trim_start_matches('/'))
    }

    async fn find_customer_by_email(&self, email: &str) -> AppResult<Option<StripeCustomer>> {
        let response = self.http
            .get(self.url("customers"))
            .bearer_auth(&self.secret_key)
            .query(&[("email", email), ("limit", "1")])
            .send()
            .await
            .map_err(|e| request_failed("고객 조회", e))?;

        let customers: StripeList<StripeCustomer> = read_json(response, "고객 조회").await?;
        Ok(customers.data.into_iter().next())
    }

    async fn create_customer(&self, email: &str) -> AppResult<StripeCustomer> {
        let response = self.http
            .post(self.url("customers"))
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&[("email", email)])
            .send()
            .await
            .map_err(|e| request_failed("고객 생성", e))?;

        read_json(response, "고객 생성").await
    }

    async fn find_active_subscription(&self, customer_id: &str) -> AppResult<Option<StripeSubscription>> {
        let response = self.http
            .get(self.url("subscriptions"))
            .bearer_auth(&self.secret_key)
            .query(&[("customer", customer_id), ("status", "active"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| request_failed("구독 조회", e))?;

        let subscriptions: StripeList<StripeSubscription> = read_json(response, "구독 조회").await?;
        Ok(subscriptions.data.into_iter().next())
    }
}

#[async_trait]
impl BillingGateway for StripeService {
    async fn connect_or_create_customer(&self, email: &str) -> AppResult<StripeCustomer> {
        if let Some(customer) = self.find_customer_by_email(email).await? {
            log::debug!("기존 Stripe 고객 연결: {}", customer.id);
            return Ok(customer);
        }

        let customer = self.create_customer(email).await?;
        log::info!("Stripe 고객 생성: {}", customer.id);
        Ok(customer)
    }

    async fn update_subscription_quantity(&self, customer_id: &str, quantity: i64) -> AppResult<()> {
        let subscription = self.find_active_subscription(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!(
                "고객 {}의 활성 구독이 없습니다", customer_id
            )))?;

        let item = subscription.items.data
            .first()
            .ok_or_else(|| AppError::ExternalServiceError(format!(
                "구독 {}에 항목이 없습니다", subscription.id
            )))?;

        let response = self.http
            .post(self.url(&format!("subscription_items/{}", item.id)))
            .bearer_auth(&self.secret_key)
            .form(&[("quantity", quantity.to_string())])
            .send()
            .await
            .map_err(|e| request_failed("구독 수량 변경", e))?;

        let _: serde_json::Value = read_json(response, "구독 수량 변경").await?;
        log::info!("Stripe 구독 {} 수량 변경: {}", subscription.id, quantity);
        Ok(())
    }

    async fn create_billing_session(
        &self,
        customer_id: &str,
        return_url: Option<&str>,
    ) -> AppResult<BillingSession> {
        let mut form = vec![("customer", customer_id.to_string())];
        if let Some(return_url) = return_url.map(str::to_string).or_else(|| self.default_return_url.clone()) {
            form.push(("return_url", return_url));
        }

        let response = self.http
            .post(self.url("billing_portal/sessions"))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| request_failed("빌링 포털 세션 생성", e))?;

        read_json(response, "빌링 포털 세션 생성").await
    }
}

fn request_failed(action: &str, err: reqwest::Error) -> AppError {
    AppError::ExternalServiceError(format!("Stripe {} 요청 실패: {}", action, err))
}

/// 성공 응답은 `T`로 파싱하고, 실패 응답은 Stripe 에러 메시지를 담아 반환합니다.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response, action: &str) -> AppResult<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::ExternalServiceError(describe_failure(action, status, &body)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("Stripe {} 응답 파싱 실패: {}", action, e)))
}

fn describe_failure(action: &str, status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<StripeErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .unwrap_or_else(|| body.to_string());

    format!("Stripe {} 실패 ({}): {}", action, status.as_u16(), detail)
}
