//! 요금제 설정 엔티티
//!
//! 요금제(tier)별 리소스 한도입니다. 사용자 입장에서는 읽기 전용이며
//! 여러 사용자가 같은 설정을 공유합니다.

use serde::{Deserialize, Serialize};

/// 요금제 설정 (`plan_configs` 컬렉션)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// 요금제 ID (예: `"basic"`, `"pro"`)
    #[serde(rename = "_id")]
    pub id: String,
    pub max_query_count: i64,
    pub max_team_count: i64,
    pub max_team_member_count: i64,
    /// 구독 수량을 늘려 팀 멤버 한도를 확장할 수 있는지 여부
    #[serde(default)]
    pub allow_more_team_members: bool,
}

/// 실제로 적용되는 요금제 한도
///
/// 요금제 할당이 있으면 `max_team_member_count`가
/// `max(설정값, 구매 수량)`으로 올라갑니다. 설정값보다 작아지는 일은 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectivePlanConfig {
    pub id: String,
    pub max_query_count: i64,
    pub max_team_count: i64,
    pub max_team_member_count: i64,
    pub allow_more_team_members: bool,
}

impl PlanConfig {
    /// 구매 수량을 반영한 실효 한도를 계산합니다.
    pub fn with_quantity_floor(&self, quantity: i64) -> EffectivePlanConfig {
        EffectivePlanConfig {
            max_team_member_count: self.max_team_member_count.max(quantity),
            ..self.as_effective()
        }
    }

    /// 할당 없이 그대로 적용되는 한도 (기본 요금제 폴백)
    pub fn as_effective(&self) -> EffectivePlanConfig {
        EffectivePlanConfig {
            id: self.id.clone(),
            max_query_count: self.max_query_count,
            max_team_count: self.max_team_count,
            max_team_member_count: self.max_team_member_count,
            allow_more_team_members: self.allow_more_team_members,
        }
    }
}
