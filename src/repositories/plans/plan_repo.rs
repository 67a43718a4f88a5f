//! # 요금제 리포지토리 구현
//!
//! 할당 조회는 `$lookup` 한 번으로 설정까지 조인합니다.
//! 조인 결과에 설정이 없으면(참조가 깨진 할당) 할당이 없는 것으로 취급하여
//! 서비스가 기본 요금제로 폴백하게 합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::{collections, parse_object_id, Database};
use crate::domain::entities::plans::{PlanConfig, UserPlan, UserPlanWithConfig};
use crate::repositories::StoreResult;
use super::PlanStore;

/// `$lookup`으로 설정을 붙일 필드 이름
const JOINED_CONFIG_FIELD: &str = "plan_config";

pub struct PlanRepository {
    db: Arc<Database>,
}

impl PlanRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn user_plans(&self) -> Collection<UserPlan> {
        self.db.collection(collections::USER_PLANS)
    }

    fn plan_configs(&self) -> Collection<PlanConfig> {
        self.db.collection(collections::PLAN_CONFIGS)
    }

    /// 할당 문서와 조인된 설정 문서를 분리해 역직렬화합니다.
    fn split_joined(mut joined: Document) -> StoreResult<Option<UserPlanWithConfig>> {
        let config = match joined.remove(JOINED_CONFIG_FIELD) {
            Some(bson::Bson::Document(config)) => config,
            _ => return Ok(None),
        };

        Ok(Some(UserPlanWithConfig {
            plan: bson::from_document(joined)?,
            config: bson::from_document(config)?,
        }))
    }

    pub async fn create_indexes(&self) -> StoreResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.user_plans()
            .create_index(user_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl PlanStore for PlanRepository {
    async fn find_user_plan_with_config(&self, user_id: &str) -> StoreResult<Option<UserPlanWithConfig>> {
        let Some(user_id) = parse_object_id(user_id) else {
            return Ok(None);
        };

        let pipeline = [
            doc! { "$match": { "user_id": user_id } },
            doc! { "$limit": 1 },
            doc! { "$lookup": {
                "from": collections::PLAN_CONFIGS,
                "localField": "plan_config_id",
                "foreignField": "_id",
                "as": JOINED_CONFIG_FIELD,
            } },
            doc! { "$unwind": {
                "path": format!("${}", JOINED_CONFIG_FIELD),
                "preserveNullAndEmptyArrays": true,
            } },
        ];

        let mut cursor = self.user_plans()
            .aggregate(pipeline)
            .await?;

        match cursor.try_next().await? {
            Some(joined) => {
                let result = Self::split_joined(joined)?;
                if result.is_none() {
                    log::warn!("요금제 할당({})이 존재하지 않는 설정을 참조합니다", user_id);
                }
                Ok(result)
            }
            None => Ok(None),
        }
    }

    async fn find_plan_config(&self, plan_config_id: &str) -> StoreResult<Option<PlanConfig>> {
        Ok(self.plan_configs()
            .find_one(doc! { "_id": plan_config_id })
            .await?)
    }

    async fn update_quantity(&self, user_id: &str, quantity: i64) -> StoreResult<bool> {
        let Some(user_id) = parse_object_id(user_id) else {
            return Ok(false);
        };

        let result = self.user_plans()
            .update_one(
                doc! { "user_id": user_id },
                doc! { "$set": { "quantity": quantity } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
