//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 토큰이 없거나 유효하지 않으면 401
    Required,
    /// 토큰이 유효할 때만 사용자 정보를 저장하고 항상 진행
    Optional,
}

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode, token_service: Arc<TokenService>) -> Self {
        Self { mode, token_service }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required(token_service: Arc<TokenService>) -> Self {
        Self::new(AuthMode::Required, token_service)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional(token_service: Arc<TokenService>) -> Self {
        Self::new(AuthMode::Optional, token_service)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::models::auth::OptionalUser;

    async fn whoami(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id())
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("middleware-secret", 1))
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/user")
                    .wrap(AuthMiddleware::required(token_service()))
                    .route("/me", web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get().uri("/user/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_required_rejects_bad_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/user")
                    .wrap(AuthMiddleware::required(token_service()))
                    .route("/me", web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/user/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_passes_user_to_handler() {
        let tokens = token_service();
        let token = tokens.generate_access_token("507f1f77bcf86cd799439011", None).unwrap();
        let app = test::init_service(
            App::new().service(
                web::scope("/user")
                    .wrap(AuthMiddleware::required(tokens))
                    .route("/me", web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/user/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "507f1f77bcf86cd799439011");
    }

    #[actix_web::test]
    async fn test_optional_lets_anonymous_through() {
        let app = test::init_service(
            App::new().service(
                web::scope("/public")
                    .wrap(AuthMiddleware::optional(token_service()))
                    .route("/me", web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get().uri("/public/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
