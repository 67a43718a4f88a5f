//! 인증된 사용자 정보
//!
//! 인증 미들웨어가 토큰을 검증한 뒤 Request Extensions에 저장하고,
//! 핸들러는 추출기(`FromRequest`)로 꺼내 씁니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 `sub` 클레임 (사용자 ID)
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 인증 정보가 없어도 실패하지 않는 추출기
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    /// 사용자 ID. 인증 정보가 없으면 빈 문자열이며, 조회 시 아무것도 찾지 못합니다.
    pub fn user_id(&self) -> String {
        self.0
            .as_ref()
            .map(|user| user.user_id.clone())
            .unwrap_or_default()
    }
}

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
