//! # 사용자 리포지토리 구현
//!
//! `users`, `workspaces`, `user_credentials` 컬렉션을 다룹니다.
//!
//! ## 특징
//!
//! - **가입 트랜잭션**: 사용자 + 기본 워크스페이스 + 자격 증명을 한 트랜잭션으로 삽입
//! - **중복 판정**: 이메일 유니크 인덱스 위반(E11000)을 `StoreError::UniqueViolation`으로 구분
//! - **관대한 ID 처리**: ObjectId 형식이 아닌 ID는 "없음"으로 취급

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    ClientSession, Collection, IndexModel,
};
use crate::db::{collections, parse_object_id, Database};
use crate::domain::dto::users::{ProviderInfo, UpdateUserRequest};
use crate::domain::entities::users::{User, UserCredential};
use crate::domain::entities::workspaces::Workspace;
use crate::repositories::{StoreError, StoreResult};
use super::UserStore;

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
///
/// ## 인덱스
///
/// - `users.email` (unique) - 중복 가입 방지
/// - `users.stripe_customer_id` - 결제 웹훅 등의 역조회
/// - `user_credentials.(provider, provider_user_id)` (unique)
/// - `workspaces.owner_id`
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection(collections::USERS)
    }

    fn workspaces(&self) -> Collection<Workspace> {
        self.db.collection(collections::WORKSPACES)
    }

    fn credentials(&self) -> Collection<UserCredential> {
        self.db.collection(collections::USER_CREDENTIALS)
    }

    /// 트랜잭션 안에서 가입에 필요한 문서들을 삽입합니다.
    async fn insert_account(
        &self,
        session: &mut ClientSession,
        user: &mut User,
        provider_info: Option<ProviderInfo>,
    ) -> StoreResult<()> {
        let result = self.users()
            .insert_one(&*user)
            .session(&mut *session)
            .await?;

        let user_id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Database("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(user_id);

        self.workspaces()
            .insert_one(Workspace::default_for(user_id))
            .session(&mut *session)
            .await?;

        if let Some(info) = provider_info {
            let credential = UserCredential::new(user_id, info.provider, info.provider_user_id);
            self.credentials()
                .insert_one(credential)
                .session(&mut *session)
                .await?;
        }

        Ok(())
    }

    /// 애플리케이션 시작 시 한 번 호출합니다.
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> StoreResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let customer_index = IndexModel::builder()
            .keys(doc! { "stripe_customer_id": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("stripe_customer_id".to_string())
                .build())
            .build();

        self.users()
            .create_indexes([email_index, customer_index])
            .await?;

        let credential_index = IndexModel::builder()
            .keys(doc! { "provider": 1, "provider_user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_user_unique".to_string())
                .build())
            .build();

        self.credentials()
            .create_index(credential_index)
            .await?;

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1 })
            .build();

        self.workspaces()
            .create_index(owner_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        Ok(self.users()
            .find_one(doc! { "_id": object_id })
            .await?)
    }

    async fn find_by_billing_customer_id(&self, customer_id: &str) -> StoreResult<Option<User>> {
        if customer_id.is_empty() {
            return Ok(None);
        }

        Ok(self.users()
            .find_one(doc! { "stripe_customer_id": customer_id })
            .await?)
    }

    async fn create_with_workspace(
        &self,
        mut user: User,
        provider_info: Option<ProviderInfo>,
    ) -> StoreResult<User> {
        let mut session = self.db.start_session().await?;
        session.start_transaction().await?;

        match self.insert_account(&mut session, &mut user, provider_info).await {
            Ok(()) => {
                session.commit_transaction().await?;
                Ok(user)
            }
            Err(err) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    log::warn!("가입 트랜잭션 중단 실패 ({}): {}", user.email, abort_err);
                }
                Err(err)
            }
        }
    }

    async fn update(&self, id: &str, changes: &UpdateUserRequest) -> StoreResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self.users()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": changes.to_set_document() },
            )
            .with_options(options)
            .await?)
    }

    async fn set_billing_customer_id(&self, id: &str, customer_id: &str) -> StoreResult<()> {
        let Some(object_id) = parse_object_id(id) else {
            return Err(StoreError::Database(format!("유효하지 않은 사용자 ID: {:?}", id)));
        };

        self.users()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "stripe_customer_id": customer_id, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(())
    }
}
