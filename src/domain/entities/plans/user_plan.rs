use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use super::plan_config::{EffectivePlanConfig, PlanConfig};

/// 사용자별 요금제 할당 (`user_plans` 컬렉션)
///
/// 사용자당 최대 하나(`user_id` 유니크)이며, `quantity`는 구매한 좌석 수입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPlan {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub plan_config_id: String,
    #[serde(default)]
    pub quantity: i64,
}

/// 요금제 설정이 조인된 할당
#[derive(Debug, Clone, PartialEq)]
pub struct UserPlanWithConfig {
    pub plan: UserPlan,
    pub config: PlanConfig,
}

impl UserPlanWithConfig {
    pub fn effective(&self) -> EffectivePlanConfig {
        self.config.with_quantity_floor(self.plan.quantity)
    }
}
