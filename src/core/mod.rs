//! 애플리케이션 핵심 인프라 모듈
//!
//! 전역 에러 타입과 컴포넌트 조립(생성자 주입) 레지스트리를 제공합니다.
//!
//! # Modules
//!
//! - [`errors`] - [`AppError`] 및 `AppResult` 별칭
//! - [`registry`] - [`ServiceRegistry`]: 저장소, 결제 게이트웨이, 서비스 조립

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
