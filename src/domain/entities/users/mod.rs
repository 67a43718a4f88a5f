//! Users Entity Module
//!
//! 사용자 계정([`User`](user::User))과 외부 인증 프로바이더 연결
//! 정보([`UserCredential`](credential::UserCredential))를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "user@example.com".to_string(),
//!     "Ada".to_string(),
//!     "Lovelace".to_string(),
//!     None,
//!     Some("cus_123".to_string()),
//! );
//! ```

pub mod user;
pub mod credential;

pub use user::User;
pub use credential::UserCredential;
