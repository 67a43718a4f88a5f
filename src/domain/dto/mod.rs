//! # Data Transfer Objects (DTO) Module
//!
//! API 경계(HTTP 요청/응답)와 서비스 호출 경계에서 사용하는 데이터 구조입니다.
//! 엔티티를 그대로 노출하지 않고, 응답 필드 이름은 클라이언트와 약속한
//! snake_case 계약을 그대로 따릅니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     │   ├── signup.rs          # 가입 요청 + 외부 프로바이더 정보
//!     │   └── update_user.rs     # 프로필 부분 수정
//!     └── response/
//!         ├── user_response.rs   # 사용자 정보
//!         ├── billing_response.rs # { url }
//!         ├── plan_response.rs   # 요금제 한도
//!         └── stats_response.rs  # 소유/접근 가능 리소스 수
//! ```

pub mod users;

pub use users::*;
