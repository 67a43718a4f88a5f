//! 리소스 개수 집계
//!
//! `GET /user/stats`가 사용하는 카운터입니다. 리소스 종류마다 하나의
//! [`ResourceCounter`]가 있고, 각 카운터는 "소유한 것"과 "접근 가능한 것"을
//! 따로 셉니다.

use async_trait::async_trait;
use super::StoreResult;

pub mod resource_counter;

pub use resource_counter::MongoResourceCounter;

/// 집계 대상 리소스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Queries,
    Collections,
    Teams,
}

impl ResourceKind {
    pub fn collection_name(&self) -> &'static str {
        use crate::db::collections;

        match self {
            ResourceKind::Queries => collections::QUERY_ITEMS,
            ResourceKind::Collections => collections::QUERY_COLLECTIONS,
            ResourceKind::Teams => collections::TEAMS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Queries => "queries",
            ResourceKind::Collections => "collections",
            ResourceKind::Teams => "teams",
        }
    }
}

#[async_trait]
pub trait ResourceCounter: Send + Sync {
    /// `own_only`가 참이면 사용자가 소유한 것만, 거짓이면 접근 가능한 전부를 셉니다.
    async fn count(&self, user_id: &str, own_only: bool) -> StoreResult<u64>;
}
