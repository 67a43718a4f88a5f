//! 사용자 요청 DTO
//!
//! `validator` 파생 매크로로 형식 검증 규칙을 선언합니다.
//! 검증은 DTO를 받는 쪽(핸들러 또는 인증 흐름)에서 `validate()`로 수행하며,
//! 서비스 계층은 추가 검증 없이 저장소 제약에 맡깁니다.

pub mod signup;
pub mod update_user;

pub use signup::{SignupRequest, ProviderInfo};
pub use update_user::UpdateUserRequest;
