//! # Application Error Handling System
//!
//! 계정 서비스 전체에서 사용하는 통합 에러 타입입니다.
//! 저장소(MongoDB), 결제 제공자(Stripe), 인증 계층에서 발생한 실패를
//! 하나의 [`AppError`]로 모아 Actix-Web 응답으로 자동 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 결제 고객 정보 누락 |
//! | `NotFound` | 404 Not Found | 사용자/구독 없음 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 가입 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | Stripe API 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = user_store
//!     .find_by_id(user_id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
//! ```

use thiserror::Error;
use crate::repositories::StoreError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스(Stripe) 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러를 상태 코드와 `{"error": ...}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            // 서비스 계층이 문맥(이메일 등)을 붙여 다시 매핑하지 않은 경우의 기본값
            StoreError::UniqueViolation(msg) => AppError::ConflictError(msg),
            StoreError::Database(msg) => AppError::DatabaseError(msg),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email a@b.c already used.".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_external_service_error_is_internal() {
        let error = AppError::ExternalServiceError("stripe down".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_validation_error_body() {
        let error = AppError::ValidationError("User 1 has no billing customer".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Validation error: User 1 has no billing customer");
    }

    #[test]
    fn test_store_error_conversion() {
        let unique: AppError = StoreError::UniqueViolation("dup".to_string()).into();
        assert!(matches!(unique, AppError::ConflictError(_)));

        let db: AppError = StoreError::Database("boom".to_string()).into();
        assert!(matches!(db, AppError::DatabaseError(ref m) if m == "boom"));
    }
}
