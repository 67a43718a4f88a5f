//! 요금제 데이터 액세스
//!
//! [`PlanStore`]는 요금제 할당(`user_plans`)과 요금제 설정(`plan_configs`)을
//! 읽고, 구매 수량을 저장하는 인터페이스입니다.

use async_trait::async_trait;
use crate::domain::entities::plans::{PlanConfig, UserPlanWithConfig};
use super::StoreResult;

pub mod plan_repo;

pub use plan_repo::PlanRepository;

#[async_trait]
pub trait PlanStore: Send + Sync {
    /// 사용자의 요금제 할당을 설정과 함께 조회합니다. 할당이 없으면 `Ok(None)`.
    async fn find_user_plan_with_config(&self, user_id: &str) -> StoreResult<Option<UserPlanWithConfig>>;

    /// 요금제 설정을 ID로 조회합니다.
    async fn find_plan_config(&self, plan_config_id: &str) -> StoreResult<Option<PlanConfig>>;

    /// 할당의 구매 수량을 저장합니다. 할당이 없으면 `Ok(false)`.
    async fn update_quantity(&self, user_id: &str, quantity: i64) -> StoreResult<bool>;
}
