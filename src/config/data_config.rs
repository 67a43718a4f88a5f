//! 데이터 및 서버 설정 관리 모듈
//!
//! HTTP 서버 바인딩 주소, 요청 빈도 제한, 데이터베이스 연결 정보를 관리합니다.

use std::env;

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
///
/// - `MONGODB_URI` (기본값: `mongodb://localhost:27017`)
/// - `DATABASE_NAME` (기본값: `account_service_dev`)
///
/// 사용자 생성은 다중 문서 트랜잭션을 사용하므로 레플리카 셋 구성이 필요합니다.
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "account_service_dev".to_string())
    }
}

/// 요청 빈도 제한 설정 (`actix-governor`)
///
/// - `RATE_LIMIT_PER_SECOND` (기본값: 100)
/// - `RATE_LIMIT_BURST_SIZE` (기본값: 200)
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_PER_SECOND 미설정 또는 파싱 실패, 기본값 100 사용");
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(200);

        Self { per_second, burst_size }
    }
}
