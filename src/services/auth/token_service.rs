//! JWT 토큰 검증 서비스 구현
//!
//! HMAC-SHA256(HS256)으로 서명된 액세스 토큰을 검증합니다.
//! 로그인과 리프레시 흐름은 이 서비스 밖에서 처리되며, 여기서는
//! `sub` 클레임의 사용자 ID를 꺼내는 데 필요한 기능만 제공합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::auth::TokenClaims;

/// JWT 토큰 서비스
///
/// 서명 키를 생성 시점에 받아 보관합니다.
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS`로 구성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 사용자 ID를 `sub`로 하는 액세스 토큰을 생성합니다.
    ///
    /// 운영 도구와 테스트에서 토큰을 만들 때 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn generate_access_token(&self, user_id: &str, email: Option<&str>) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            email: email.map(str::to_string),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 형식, 서명 불일치
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// `Authorization` 헤더 값에서 `Bearer ` 뒤의 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
