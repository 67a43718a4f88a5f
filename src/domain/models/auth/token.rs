//! JWT 클레임 구조체
//!
//! RFC 7519 표준 클레임 중 이 서비스가 검증에 사용하는 최소 집합입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload)
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
/// - `email`: 사용자 이메일 (선택사항)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
