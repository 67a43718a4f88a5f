//! # Domain Layer Module
//!
//! 계정 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 문서 (User, Workspace, PlanConfig, UserPlan ...)
//! ├── dto        - HTTP/서비스 경계 데이터 (요청, 응답)
//! └── models     - 비영속 모델 (토큰 클레임, Stripe 응답)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, Stripe)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use entities::plans::{EffectivePlanConfig, PlanConfig, UserPlan};
