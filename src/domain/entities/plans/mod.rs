//! Plans Entity Module
//!
//! 요금제 설정([`PlanConfig`](plan_config::PlanConfig))과 사용자별 요금제
//! 할당([`UserPlan`](user_plan::UserPlan))을 정의합니다.

pub mod plan_config;
pub mod user_plan;

pub use plan_config::{PlanConfig, EffectivePlanConfig};
pub use user_plan::{UserPlan, UserPlanWithConfig};
