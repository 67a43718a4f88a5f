use serde::{Deserialize, Serialize};
use crate::domain::entities::plans::EffectivePlanConfig;

/// `GET /user/plan` 응답
///
/// 적용할 요금제를 찾지 못하면 모든 한도가 0입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub max_query_count: i64,
    pub max_team_count: i64,
    pub max_team_member_count: i64,
}

impl From<Option<EffectivePlanConfig>> for PlanResponse {
    fn from(plan: Option<EffectivePlanConfig>) -> Self {
        match plan {
            Some(plan) => Self {
                max_query_count: plan.max_query_count,
                max_team_count: plan.max_team_count,
                max_team_member_count: plan.max_team_member_count,
            },
            None => Self::default(),
        }
    }
}
