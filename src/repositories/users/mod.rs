//! 사용자 데이터 액세스
//!
//! [`UserStore`]는 서비스가 의존하는 좁은 인터페이스이고,
//! [`UserRepository`](user_repo::UserRepository)가 MongoDB 구현입니다.

use async_trait::async_trait;
use crate::domain::dto::users::{ProviderInfo, UpdateUserRequest};
use crate::domain::entities::users::User;
use super::StoreResult;

pub mod user_repo;

pub use user_repo::UserRepository;

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 조회합니다. 형식이 잘못된 ID는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// 결제 고객 ID로 역조회합니다.
    async fn find_by_billing_customer_id(&self, customer_id: &str) -> StoreResult<Option<User>>;

    /// 사용자, 기본 워크스페이스, (있다면) 외부 자격 증명을 하나의 단위로 생성합니다.
    ///
    /// 이메일이 이미 존재하면 `StoreError::UniqueViolation`을 반환하고
    /// 아무것도 저장하지 않습니다.
    async fn create_with_workspace(
        &self,
        user: User,
        provider_info: Option<ProviderInfo>,
    ) -> StoreResult<User>;

    /// 부분 업데이트 후 최신 문서를 반환합니다. 사용자가 없으면 `Ok(None)`.
    async fn update(&self, id: &str, changes: &UpdateUserRequest) -> StoreResult<Option<User>>;

    /// 결제 고객 ID를 저장합니다.
    async fn set_billing_customer_id(&self, id: &str, customer_id: &str) -> StoreResult<()>;
}
