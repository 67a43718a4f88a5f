//! # User Data Transfer Objects Module
//!
//! 사용자 계정 API의 요청/응답 DTO를 모아 둡니다.
//!
//! | 용도 | 타입 |
//! |------|------|
//! | 가입 | [`SignupRequest`], [`ProviderInfo`] |
//! | 프로필 수정 | [`UpdateUserRequest`] |
//! | `GET /user/billing` | [`BillingUrlResponse`] |
//! | `GET /user/plan` | [`PlanResponse`] |
//! | `GET /user/stats` | [`StatsResponse`] |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
