//! 계정 서비스 백엔드
//!
//! 사용자 계정, 요금제 한도, Stripe 결제 연동을 담당하는 Rust 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입(기본 워크스페이스 포함), 조회, 프로필 수정
//! - **요금제**: 할당된 요금제 + 구매 수량 하한, 기본 요금제 폴백
//! - **결제**: Stripe 고객 연결, 구독 좌석 수 변경, 빌링 포털 URL
//! - **사용량**: 소유/접근 가능한 쿼리, 컬렉션, 팀 개수
//! - **JWT 인증**: `/user` 스코프 베어러 토큰 검증
//! - **MongoDB**: 사용자/요금제 데이터 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /user/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, PlanStore, ResourceCounter
//! │  BillingGateway │ ← Stripe
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::build(database, Arc::new(StripeService::from_env()), token_service);
//! let plan = registry.user_service.get_plan_config(&user_id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod testing;
