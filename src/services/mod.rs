//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 협력 객체를 주입받습니다. 구성은
//! [`ServiceRegistry`](crate::core::registry::ServiceRegistry)에서 한 번에 이뤄집니다.
//!
//! - [`users`] - 사용자 생명주기, 요금제, 결제 연동
//! - [`billing`] - 결제 제공자(Stripe) 게이트웨이
//! - [`auth`] - 베어러 토큰 검증

pub mod users;
pub mod billing;
pub mod auth;
