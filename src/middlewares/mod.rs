//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <JWT>` 추출 및 검증
//! - 검증된 사용자를 request extension에 저장
//! - 강제(Required)/선택(Optional) 모드
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/user")
//!             .wrap(AuthMiddleware::required(token_service.clone()))
//!             .service(handlers::users::get_current_plan)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{AuthMiddleware, AuthMode};
