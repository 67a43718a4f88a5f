//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `.env.dev` / `.env.prod` 파일은 `main.rs`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, MongoDB 연결, 요청 속도 제한
//! - [`auth_config`] - JWT 검증, 인증 프로바이더
//! - [`billing_config`] - Stripe API, 기본 요금제
//!
//! ## 환경 변수 요약
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="account_service"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 결제
//! export STRIPE_SECRET_KEY="sk_test_..."
//! ```

pub mod data_config;
pub mod auth_config;
pub mod billing_config;

pub use data_config::*;
pub use auth_config::*;
pub use billing_config::*;
