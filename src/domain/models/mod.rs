//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 검증된 토큰 클레임과 요청에 실린 인증 사용자
//! - [`billing`] - Stripe API 응답 모델

pub mod auth;
pub mod billing;
