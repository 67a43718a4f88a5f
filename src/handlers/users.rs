//! # User Account HTTP Handlers
//!
//! 로그인한 사용자 자신의 결제/요금제/사용량 정보를 돌려주는 엔드포인트입니다.
//! 모든 경로는 `/user` 스코프 아래에 있으며 인증 미들웨어를 거칩니다.
//!
//! | 메서드 | 경로 | 설명 | 응답 |
//! |--------|------|------|------|
//! | `GET` | `/user/billing` | Stripe 빌링 포털 URL | `{ "url": ... }` |
//! | `GET` | `/user/plan` | 적용 중인 요금제 한도 | `{ max_query_count, max_team_count, max_team_member_count }` |
//! | `GET` | `/user/stats` | 소유/접근 가능한 리소스 수 | `{ queries, collections, teams }` |
//!
//! 사용자 ID는 [`OptionalUser`]로 꺼냅니다. 인증 정보가 없으면 빈 문자열이
//! 그대로 서비스로 전달됩니다.

use actix_web::{get, http::header, web, HttpRequest, HttpResponse};
use crate::core::errors::AppError;
use crate::core::registry::StatsCounters;
use crate::domain::dto::users::{BillingUrlResponse, OwnAccessCount, PlanResponse, StatsResponse};
use crate::domain::models::auth::OptionalUser;
use crate::services::users::UserService;

/// Stripe 빌링 포털 URL 발급
///
/// `Referer` 헤더가 있으면 포털의 복귀 URL로 전달합니다.
///
/// ```bash
/// curl http://localhost:8080/user/billing \
///   -H "Authorization: Bearer eyJ..." \
///   -H "Referer: https://app.example.com/settings"
/// ```
#[get("/billing")]
pub async fn get_billing_url(
    req: HttpRequest,
    user: OptionalUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let return_url = req.headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    let url = user_service
        .get_billing_url(&user.user_id(), return_url)
        .await?;

    Ok(HttpResponse::Ok().json(BillingUrlResponse { url }))
}

/// 적용 중인 요금제 한도. 설정을 찾지 못하면 모든 값이 0입니다.
#[get("/plan")]
pub async fn get_current_plan(
    user: OptionalUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let plan = user_service.get_plan_config(&user.user_id()).await?;

    Ok(HttpResponse::Ok().json(PlanResponse::from(plan)))
}

/// 리소스 사용량
///
/// 여섯 개의 집계를 동시에 실행합니다.
#[get("/stats")]
pub async fn get_stats(
    user: OptionalUser,
    counters: web::Data<StatsCounters>,
) -> Result<HttpResponse, AppError> {
    let user_id = user.user_id();

    let (own_queries, access_queries, own_collections, access_collections, own_teams, access_teams) =
        futures_util::try_join!(
            counters.queries.count(&user_id, true),
            counters.queries.count(&user_id, false),
            counters.collections.count(&user_id, true),
            counters.collections.count(&user_id, false),
            counters.teams.count(&user_id, true),
            counters.teams.count(&user_id, false),
        )?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        queries: OwnAccessCount { own: own_queries, access: access_queries },
        collections: OwnAccessCount { own: own_collections, access: access_collections },
        teams: OwnAccessCount { own: own_teams, access: access_teams },
    }))
}
