//! 공통 유틸리티 모듈
//!
//! - [`logger`] - 컴포넌트 이름을 target으로 쓰는 주입형 로거
//! - [`display_terminal`] - 서버 기동 시 터미널 출력 포맷팅

pub mod logger;
pub mod display_terminal;

pub use logger::ComponentLogger;
