//! 테스트용 인메모리 구현
//!
//! 서비스/핸들러 테스트에서 MongoDB와 Stripe 대신 사용합니다.
//! 호출 기록과 실패 주입을 지원합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{ProviderInfo, UpdateUserRequest};
use crate::domain::entities::plans::{PlanConfig, UserPlan, UserPlanWithConfig};
use crate::domain::entities::users::User;
use crate::domain::models::billing::{BillingSession, StripeCustomer};
use crate::repositories::{PlanStore, ResourceCounter, StoreError, StoreResult, UserStore};
use crate::services::billing::BillingGateway;

pub fn user_with_customer(email: &str, customer_id: Option<&str>) -> User {
    let mut user = User::new(
        email.to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        None,
        customer_id.map(str::to_string),
    );
    user.id = Some(ObjectId::new());
    user
}

pub fn plan_config(id: &str, max_team_member_count: i64, allow_more_team_members: bool) -> PlanConfig {
    PlanConfig {
        id: id.to_string(),
        max_query_count: 100,
        max_team_count: 3,
        max_team_member_count,
        allow_more_team_members,
    }
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    workspaces_created: Mutex<usize>,
    credentials_created: Mutex<Vec<ProviderInfo>>,
    fail_with: Mutex<Option<StoreError>>,
}

impl InMemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    pub fn fail_with(&self, err: StoreError) {
        *self.fail_with.lock().unwrap() = Some(err);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn workspaces_created(&self) -> usize {
        *self.workspaces_created.lock().unwrap()
    }

    pub fn credentials_created(&self) -> Vec<ProviderInfo> {
        self.credentials_created.lock().unwrap().clone()
    }

    fn injected_failure(&self) -> StoreResult<()> {
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        self.injected_failure()?;
        Ok(self.users().into_iter().find(|u| u.id_string().as_deref() == Some(id)))
    }

    async fn find_by_billing_customer_id(&self, customer_id: &str) -> StoreResult<Option<User>> {
        self.injected_failure()?;
        Ok(self.users().into_iter().find(|u| u.billing_customer_id() == Some(customer_id)))
    }

    async fn create_with_workspace(
        &self,
        mut user: User,
        provider_info: Option<ProviderInfo>,
    ) -> StoreResult<User> {
        self.injected_failure()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation(format!("E11000 duplicate key: {}", user.email)));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        *self.workspaces_created.lock().unwrap() += 1;
        if let Some(info) = provider_info {
            self.credentials_created.lock().unwrap().push(info);
        }

        Ok(user)
    }

    async fn update(&self, id: &str, changes: &UpdateUserRequest) -> StoreResult<Option<User>> {
        self.injected_failure()?;

        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id_string().as_deref() == Some(id)) else {
            return Ok(None);
        };

        if let Some(ref first_name) = changes.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(ref last_name) = changes.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(ref picture) = changes.picture {
            user.picture = Some(picture.clone());
        }
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }

    async fn set_billing_customer_id(&self, id: &str, customer_id: &str) -> StoreResult<()> {
        self.injected_failure()?;

        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id_string().as_deref() == Some(id)) {
            user.stripe_customer_id = Some(customer_id.to_string());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPlanStore {
    configs: Mutex<HashMap<String, PlanConfig>>,
    assignments: Mutex<HashMap<String, UserPlan>>,
    fail_updates: Mutex<bool>,
    drop_before_update: Mutex<bool>,
}

impl InMemoryPlanStore {
    pub fn with_config(self, config: PlanConfig) -> Self {
        self.configs.lock().unwrap().insert(config.id.clone(), config);
        self
    }

    pub fn with_assignment(self, user: &User, plan_config_id: &str, quantity: i64) -> Self {
        if let Some(user_id) = user.id {
            self.assignments.lock().unwrap().insert(user_id.to_hex(), UserPlan {
                id: Some(ObjectId::new()),
                user_id,
                plan_config_id: plan_config_id.to_string(),
                quantity,
            });
        }
        self
    }

    pub fn fail_updates(&self) {
        *self.fail_updates.lock().unwrap() = true;
    }

    /// 조회 이후 쓰기 직전에 할당이 삭제된 상황을 흉내 냅니다.
    pub fn drop_assignment_before_update(&self) {
        *self.drop_before_update.lock().unwrap() = true;
    }

    pub fn quantity_of(&self, user: &User) -> Option<i64> {
        let user_id = user.id_string()?;
        self.assignments.lock().unwrap().get(&user_id).map(|plan| plan.quantity)
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn find_user_plan_with_config(&self, user_id: &str) -> StoreResult<Option<UserPlanWithConfig>> {
        let Some(plan) = self.assignments.lock().unwrap().get(user_id).cloned() else {
            return Ok(None);
        };

        Ok(self.configs.lock().unwrap()
            .get(&plan.plan_config_id)
            .cloned()
            .map(|config| UserPlanWithConfig { plan, config }))
    }

    async fn find_plan_config(&self, plan_config_id: &str) -> StoreResult<Option<PlanConfig>> {
        Ok(self.configs.lock().unwrap().get(plan_config_id).cloned())
    }

    async fn update_quantity(&self, user_id: &str, quantity: i64) -> StoreResult<bool> {
        if *self.fail_updates.lock().unwrap() {
            return Err(StoreError::Database("write rejected".to_string()));
        }
        if *self.drop_before_update.lock().unwrap() {
            self.assignments.lock().unwrap().remove(user_id);
        }

        match self.assignments.lock().unwrap().get_mut(user_id) {
            Some(plan) => {
                plan.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// 결제 게이트웨이 호출 기록
#[derive(Debug, Clone, PartialEq)]
pub enum BillingCall {
    ConnectOrCreate(String),
    UpdateQuantity(String, i64),
    CreateSession(String, Option<String>),
}

#[derive(Default)]
pub struct RecordingBillingGateway {
    calls: Mutex<Vec<BillingCall>>,
    fail: Mutex<bool>,
}

impl RecordingBillingGateway {
    pub const NEW_CUSTOMER_ID: &'static str = "cus_new";

    pub fn failing() -> Self {
        Self {
            fail: Mutex::new(true),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<BillingCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BillingCall) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            return Err(AppError::ExternalServiceError("stripe unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BillingGateway for RecordingBillingGateway {
    async fn connect_or_create_customer(&self, email: &str) -> AppResult<StripeCustomer> {
        self.record(BillingCall::ConnectOrCreate(email.to_string()))?;
        Ok(StripeCustomer {
            id: Self::NEW_CUSTOMER_ID.to_string(),
            email: Some(email.to_string()),
        })
    }

    async fn update_subscription_quantity(&self, customer_id: &str, quantity: i64) -> AppResult<()> {
        self.record(BillingCall::UpdateQuantity(customer_id.to_string(), quantity))
    }

    async fn create_billing_session(
        &self,
        customer_id: &str,
        return_url: Option<&str>,
    ) -> AppResult<BillingSession> {
        self.record(BillingCall::CreateSession(
            customer_id.to_string(),
            return_url.map(str::to_string),
        ))?;
        Ok(BillingSession {
            id: "bps_1".to_string(),
            url: format!("https://billing.test/session/{}", customer_id),
        })
    }
}

/// 사용자와 무관하게 고정된 값을 돌려주는 카운터
pub struct FixedCounter {
    pub own: u64,
    pub access: u64,
}

#[async_trait]
impl ResourceCounter for FixedCounter {
    async fn count(&self, _user_id: &str, own_only: bool) -> StoreResult<u64> {
        Ok(if own_only { self.own } else { self.access })
    }
}
