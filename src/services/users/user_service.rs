//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정 생명주기와 요금제/결제 연동 규칙을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │   Plan Limits   │  │     Billing     │  │
//! │  │ • Stripe 고객   │  │ • 할당 + 설정   │  │ • 좌석 수 변경  │  │
//! │  │ • 사용자+WS     │  │ • 기본 요금제   │  │ • 포털 URL      │  │
//! │  │ • 중복 → 409    │  │ • 수량 하한     │  │ • 고객 ID 저장  │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!          │                       │                      │
//!          ▼                       ▼                      ▼
//!     UserStore               PlanStore             BillingGateway
//! ```
//!
//! ## 결제/저장 순서
//!
//! 좌석 수 변경은 Stripe 구독을 먼저 바꾸고 그다음 로컬 할당을 저장합니다.
//! 두 번째 단계가 실패하면 Stripe 쪽은 이미 바뀐 상태로 남습니다.
//! 이 경우 `error!` 로그에 고객 ID와 수량을 남기고 에러를 그대로 반환하며,
//! 자동 보정은 하지 않습니다.

use std::sync::Arc;
use crate::config::PlanSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{ProviderInfo, SignupRequest, UpdateUserRequest};
use crate::domain::entities::plans::EffectivePlanConfig;
use crate::domain::entities::users::User;
use crate::repositories::{PlanStore, StoreError, UserStore};
use crate::services::billing::BillingGateway;
use crate::utils::ComponentLogger;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 협력 객체는 생성자로 주입됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(UserRepository::new(db.clone())),
///     Arc::new(PlanRepository::new(db.clone())),
///     Arc::new(StripeService::from_env()),
///     ComponentLogger::new("UserService"),
/// );
/// ```
pub struct UserService {
    users: Arc<dyn UserStore>,
    plans: Arc<dyn PlanStore>,
    billing: Arc<dyn BillingGateway>,
    logger: ComponentLogger,
    basic_plan_id: String,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        plans: Arc<dyn PlanStore>,
        billing: Arc<dyn BillingGateway>,
        logger: ComponentLogger,
    ) -> Self {
        Self {
            users,
            plans,
            billing,
            logger,
            basic_plan_id: PlanSettings::basic_plan_id(),
        }
    }

    /// 할당이 없는 사용자에게 적용할 요금제 ID를 바꿉니다.
    pub fn with_basic_plan_id(mut self, basic_plan_id: impl Into<String>) -> Self {
        self.basic_plan_id = basic_plan_id.into();
        self
    }

    /// 새 사용자를 생성합니다.
    ///
    /// # 처리 순서
    ///
    /// 1. Stripe에서 이메일로 고객을 찾거나 새로 만듭니다.
    /// 2. 사용자, 기본 워크스페이스("My workspace"), 외부 자격 증명을
    ///    하나의 트랜잭션으로 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - `"Email {email} already used."`
    /// * `AppError::ExternalServiceError` - Stripe 호출 실패
    /// * `AppError::DatabaseError` - 그 밖의 저장 실패
    pub async fn create_user(
        &self,
        signup: SignupRequest,
        provider_info: Option<ProviderInfo>,
    ) -> AppResult<User> {
        let email = signup.email.clone();

        let customer = self.billing
            .connect_or_create_customer(&email)
            .await?;

        let user = signup.into_user(Some(customer.id));

        let created = self.users
            .create_with_workspace(user, provider_info)
            .await
            .map_err(|err| match err {
                StoreError::UniqueViolation(_) => {
                    AppError::ConflictError(format!("Email {} already used.", email))
                }
                other => other.into(),
            })?;

        self.logger.info(format_args!(
            "사용자 생성 완료: {} <{}> ({})",
            created.display_name(),
            email,
            created.id_string().unwrap_or_default()
        ));

        Ok(created)
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<Option<User>> {
        Ok(self.users.find_by_id(user_id).await?)
    }

    /// Stripe 고객 ID로 사용자를 찾습니다.
    pub async fn get_user_by_billing_customer_id(&self, customer_id: &str) -> AppResult<Option<User>> {
        Ok(self.users.find_by_billing_customer_id(customer_id).await?)
    }

    /// 전달된 필드만 부분 수정합니다. `updated_at`은 항상 갱신됩니다.
    pub async fn update_user(&self, user_id: &str, changes: UpdateUserRequest) -> AppResult<User> {
        if changes.is_empty() {
            self.logger.debug(format_args!("사용자 {} 수정 요청에 변경 필드가 없습니다", user_id));
        }

        self.users
            .update(user_id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// 사용자에게 실제로 적용되는 요금제 한도를 계산합니다.
    ///
    /// - 할당 있음: 설정값에 구매 수량 하한을 적용 (`max(설정, 수량)`)
    /// - 할당 없음: 기본 요금제 설정을 그대로 반환
    /// - 기본 요금제마저 없으면 `None`
    pub async fn get_plan_config(&self, user_id: &str) -> AppResult<Option<EffectivePlanConfig>> {
        match self.plans.find_user_plan_with_config(user_id).await? {
            Some(assigned) => Ok(Some(assigned.effective())),
            None => self.basic_plan_config(user_id).await,
        }
    }

    async fn basic_plan_config(&self, user_id: &str) -> AppResult<Option<EffectivePlanConfig>> {
        self.logger.warn(format_args!(
            "사용자 {}의 요금제 할당이 없어 기본 요금제({})를 사용합니다",
            user_id, self.basic_plan_id
        ));

        let basic = self.plans
            .find_plan_config(&self.basic_plan_id)
            .await?;

        if basic.is_none() {
            self.logger.error(format_args!("기본 요금제 설정({})이 없습니다", self.basic_plan_id));
        }

        Ok(basic.map(|config| config.as_effective()))
    }

    /// 팀 멤버 좌석 수를 변경합니다.
    ///
    /// 요금제가 추가 좌석을 허용하지 않으면 경고만 남기고 아무것도 바꾸지 않습니다.
    /// 허용하더라도 저장할 요금제 할당이 없으면 Stripe를 건드리지 않고 `NotFound`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음, 요금제 할당 없음, 또는 Stripe 활성 구독 없음
    /// * `AppError::ValidationError` - 사용자에게 Stripe 고객 ID가 없음
    /// * `AppError::DatabaseError` - Stripe 변경 후 로컬 저장 실패 (불일치 상태)
    pub async fn update_allowed_team_member_count(&self, user_id: &str, quantity: i64) -> AppResult<()> {
        let user = self.require_user(user_id).await?;

        let assigned = self.plans.find_user_plan_with_config(user_id).await?;
        let plan = match &assigned {
            Some(assigned) => Some(assigned.effective()),
            None => self.basic_plan_config(user_id).await?,
        };

        let allows_more = plan.as_ref().is_some_and(|p| p.allow_more_team_members);
        if !allows_more {
            self.logger.warn(format_args!(
                "사용자 {}의 요금제는 팀 멤버 추가를 허용하지 않습니다 (요청 수량: {})",
                user_id, quantity
            ));
            return Ok(());
        }

        if assigned.is_none() {
            return Err(AppError::NotFound(format!("Plan assignment for user {} not found", user_id)));
        }

        let customer_id = user.billing_customer_id().ok_or_else(|| {
            AppError::ValidationError(format!("User {} has no billing customer", user_id))
        })?;

        self.billing
            .update_subscription_quantity(customer_id, quantity)
            .await?;

        match self.plans.update_quantity(user_id, quantity).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                self.logger.error(format_args!(
                    "Stripe 구독 수량은 {}로 변경됐지만 요금제 할당이 사라져 저장하지 못했습니다 (user: {}, customer: {})",
                    quantity, user_id, customer_id
                ));
                Err(AppError::NotFound(format!("Plan assignment for user {} not found", user_id)))
            }
            Err(err) => {
                self.logger.error(format_args!(
                    "Stripe 구독 수량은 {}로 변경됐지만 로컬 저장에 실패했습니다 (user: {}, customer: {}): {}",
                    quantity, user_id, customer_id, err
                ));
                Err(err.into())
            }
        }
    }

    /// Stripe 빌링 포털 URL을 발급합니다.
    ///
    /// 사용자에게 고객 ID가 없으면 먼저 고객을 연결/생성하고 그 ID를 저장합니다.
    pub async fn get_billing_url(&self, user_id: &str, return_url: Option<&str>) -> AppResult<String> {
        let user = self.require_user(user_id).await?;

        let customer_id = match user.billing_customer_id() {
            Some(id) => id.to_string(),
            None => {
                let customer = self.billing
                    .connect_or_create_customer(&user.email)
                    .await?;
                self.users
                    .set_billing_customer_id(user_id, &customer.id)
                    .await?;
                self.logger.info(format_args!("사용자 {}에 Stripe 고객 {} 연결", user_id, customer.id));
                customer.id
            }
        };

        let session = self.billing
            .create_billing_session(&customer_id, return_url)
            .await?;

        Ok(session.url)
    }

    async fn require_user(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
