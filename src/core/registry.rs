//! # Service Registry - 생성자 주입 구성
//!
//! 애플리케이션 기동 시 모든 컴포넌트를 한 곳에서 조립합니다.
//! 전역 컨테이너나 지연 초기화 없이, 각 컴포넌트는 필요한 협력 객체를
//! `Arc`로 생성자에서 받습니다.
//!
//! ## 조립 순서
//!
//! ```text
//! Database ─┬─ UserRepository ─────────┐
//!           ├─ PlanRepository ─────────┼─ UserService
//! Stripe ───┼──────────────────────────┘
//!           ├─ MongoResourceCounter(Queries)     ┐
//!           ├─ MongoResourceCounter(Collections) ├─ StatsCounters
//!           └─ MongoResourceCounter(Teams)       ┘
//! TokenService ─────────────────────────────── AuthMiddleware
//! ```
//!
//! ## 사용 예
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::build(database, billing, token_service);
//! registry.create_indexes().await?;
//!
//! HttpServer::new(move || {
//!     App::new().configure(|cfg| configure_all_routes(cfg, &registry))
//! })
//! ```

use std::sync::Arc;
use actix_web::web;
use crate::db::Database;
use crate::repositories::{
    MongoResourceCounter, PlanRepository, ResourceCounter, ResourceKind, StoreResult, UserRepository,
};
use crate::services::auth::TokenService;
use crate::services::billing::BillingGateway;
use crate::services::users::UserService;
use crate::utils::display_terminal::{print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task};
use crate::utils::ComponentLogger;

/// `GET /user/stats`가 사용하는 리소스 카운터 묶음
pub struct StatsCounters {
    pub queries: Arc<dyn ResourceCounter>,
    pub collections: Arc<dyn ResourceCounter>,
    pub teams: Arc<dyn ResourceCounter>,
}

impl StatsCounters {
    pub fn mongo(db: Arc<Database>) -> Self {
        Self {
            queries: Arc::new(MongoResourceCounter::new(db.clone(), ResourceKind::Queries)),
            collections: Arc::new(MongoResourceCounter::new(db.clone(), ResourceKind::Collections)),
            teams: Arc::new(MongoResourceCounter::new(db, ResourceKind::Teams)),
        }
    }
}

/// 조립이 끝난 컴포넌트 모음
///
/// HTTP 워커마다 복제되므로 모든 필드는 `Arc` 또는 `web::Data`입니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    pub user_service: web::Data<UserService>,
    pub stats_counters: web::Data<StatsCounters>,
    pub token_service: Arc<TokenService>,
    user_repository: Arc<UserRepository>,
    plan_repository: Arc<PlanRepository>,
}

impl ServiceRegistry {
    pub fn build(
        database: Arc<Database>,
        billing: Arc<dyn BillingGateway>,
        token_service: Arc<TokenService>,
    ) -> Self {
        print_boxed_title("SERVICE REGISTRY");

        print_step_start(1, "Repositories");
        let user_repository = Arc::new(UserRepository::new(database.clone()));
        let plan_repository = Arc::new(PlanRepository::new(database.clone()));
        let stats_counters = StatsCounters::mongo(database.clone());
        print_sub_task("UserRepository", "OK");
        print_sub_task("PlanRepository", "OK");
        print_sub_task("ResourceCounters", "queries, collections, teams");
        print_step_complete(1, "Repositories", 5);

        print_step_start(2, "Services");
        let user_service = UserService::new(
            user_repository.clone(),
            plan_repository.clone(),
            billing,
            ComponentLogger::new("UserService"),
        );
        print_sub_task("UserService", "OK");
        print_sub_task("TokenService", "OK");
        print_step_complete(2, "Services", 2);

        print_final_summary(5, 2);

        Self {
            user_service: web::Data::new(user_service),
            stats_counters: web::Data::new(stats_counters),
            token_service,
            user_repository,
            plan_repository,
        }
    }

    /// 유니크 인덱스 등 필요한 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> StoreResult<()> {
        self.user_repository.create_indexes().await?;
        self.plan_repository.create_indexes().await?;
        log::info!("MongoDB 인덱스 준비 완료");
        Ok(())
    }
}
