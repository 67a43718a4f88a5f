//! # Authentication Configuration Module
//!
//! 베어러 토큰 검증과 외부 인증 프로바이더 식별에 필요한 설정을 관리합니다.
//! 로그인/토큰 발급 흐름은 이 서비스의 범위 밖이며, 여기서는 이미 발급된
//! JWT를 검증하기 위한 값만 다룹니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;
use serde::{Deserialize, Serialize};

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 외부 인증 프로바이더
///
/// 사용자 생성 시 함께 저장되는 `UserCredential`의 프로바이더 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    GitHub,
}
