//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - 베어러 토큰 검증
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Repositories / Stripe - 데이터 접근, 결제
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data`로 주입된 서비스만 사용하며, 에러는 `AppError`의
//! `ResponseError` 구현이 상태 코드와 JSON 본문으로 바꿉니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: `/user/billing`, `/user/plan`, `/user/stats`

pub mod users;
