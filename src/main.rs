//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결, Stripe 게이트웨이, JWT 검증을 구성합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use account_service_backend::config::{RateLimitConfig, ServerConfig};
use account_service_backend::core::registry::ServiceRegistry;
use account_service_backend::db::Database;
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::auth::TokenService;
use account_service_backend::services::billing::StripeService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let database = initialize_database().await;

    let registry = ServiceRegistry::build(
        database,
        Arc::new(StripeService::from_env()),
        Arc::new(TokenService::from_env()),
    );

    if let Err(e) = registry.create_indexes().await {
        error!("인덱스 생성 실패: {}", e);
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    HttpServer::new(move || {
        let registry = registry.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &registry))
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이라 결과는 stderr로 남깁니다
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{} 프로필 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=info,UserService=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    )
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`(쉼표 구분)가 없으면 로컬 개발 주소만 허용합니다.
fn configure_cors() -> Cors {
    let origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
