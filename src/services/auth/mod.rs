//! 인증 서비스 모듈
//!
//! 이미 발급된 JWT 액세스 토큰을 검증합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_env();
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::TokenService;
