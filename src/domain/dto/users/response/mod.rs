//! 사용자 응답 DTO

pub mod billing_response;
pub mod plan_response;
pub mod stats_response;

pub use billing_response::BillingUrlResponse;
pub use plan_response::PlanResponse;
pub use stats_response::{OwnAccessCount, StatsResponse};
