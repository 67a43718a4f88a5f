//! 사용자 관리 서비스 모듈
//!
//! 가입, 조회, 프로필 수정, 요금제 한도 계산, 결제 연동을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let plan = user_service.get_plan_config(&user_id).await?;
//! let url = user_service.get_billing_url(&user_id, Some(referer)).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
