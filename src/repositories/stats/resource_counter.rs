//! # MongoDB 리소스 카운터
//!
//! ## 접근 규칙
//!
//! ```text
//! 팀 접근       = 소유한 팀 ∪ 멤버로 속한 팀  (_id $in)
//! 워크스페이스  = 소유한 워크스페이스 ∪ 접근 가능한 팀의 워크스페이스
//! 쿼리/컬렉션   = 소유한 것 ∪ 접근 가능한 워크스페이스 안의 것
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use crate::db::{collections, parse_object_id, Database};
use crate::repositories::StoreResult;
use super::{ResourceCounter, ResourceKind};

pub struct MongoResourceCounter {
    db: Arc<Database>,
    kind: ResourceKind,
}

impl MongoResourceCounter {
    pub fn new(db: Arc<Database>, kind: ResourceKind) -> Self {
        Self { db, kind }
    }

    /// 사용자가 소유하거나 멤버로 속한 팀 ID
    async fn accessible_team_ids(&self, user_id: ObjectId) -> StoreResult<Vec<Bson>> {
        let owned = self.db
            .collection::<Document>(collections::TEAMS)
            .distinct("_id", doc! { "owner_id": user_id })
            .await?;

        let member_of = self.db
            .collection::<Document>(collections::TEAM_MEMBERSHIPS)
            .distinct("team_id", doc! { "user_id": user_id })
            .await?;

        Ok(merge_ids(owned, member_of))
    }

    /// 사용자가 소유하거나 접근 가능한 팀에 속한 워크스페이스 ID
    async fn accessible_workspace_ids(&self, user_id: ObjectId) -> StoreResult<Vec<Bson>> {
        let team_ids = self.accessible_team_ids(user_id).await?;

        Ok(self.db
            .collection::<Document>(collections::WORKSPACES)
            .distinct("_id", doc! { "$or": [
                { "owner_id": user_id },
                { "team_id": { "$in": team_ids } },
            ] })
            .await?)
    }

    async fn build_filter(&self, user_id: ObjectId, own_only: bool) -> StoreResult<Document> {
        if own_only {
            return Ok(count_filter(self.kind, user_id, None));
        }

        let accessible = match self.kind {
            ResourceKind::Teams => self.accessible_team_ids(user_id).await?,
            ResourceKind::Queries | ResourceKind::Collections => {
                self.accessible_workspace_ids(user_id).await?
            }
        };

        Ok(count_filter(self.kind, user_id, Some(accessible)))
    }
}

/// 소유한 팀과 멤버로 속한 팀을 중복 없이 합칩니다.
fn merge_ids(mut owned: Vec<Bson>, member_of: Vec<Bson>) -> Vec<Bson> {
    for id in member_of {
        if !owned.contains(&id) {
            owned.push(id);
        }
    }
    owned
}

/// 카운트 필터
///
/// `accessible`이 `None`이면 소유 조건만 씁니다. 팀의 `accessible`은 소유한 팀을
/// 포함한 전체 팀 ID 목록이고, 쿼리/컬렉션의 `accessible`은 워크스페이스 ID 목록입니다.
fn count_filter(kind: ResourceKind, user_id: ObjectId, accessible: Option<Vec<Bson>>) -> Document {
    match (kind, accessible) {
        (_, None) => doc! { "owner_id": user_id },
        (ResourceKind::Teams, Some(team_ids)) => doc! { "_id": { "$in": team_ids } },
        (ResourceKind::Queries | ResourceKind::Collections, Some(workspace_ids)) => doc! { "$or": [
            { "owner_id": user_id },
            { "workspace_id": { "$in": workspace_ids } },
        ] },
    }
}

#[async_trait]
impl ResourceCounter for MongoResourceCounter {
    async fn count(&self, user_id: &str, own_only: bool) -> StoreResult<u64> {
        let Some(user_id) = parse_object_id(user_id) else {
            return Ok(0);
        };

        let filter = self.build_filter(user_id, own_only).await?;

        Ok(self.db
            .collection::<Document>(self.kind.collection_name())
            .count_documents(filter)
            .await?)
    }
}
