//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아니라 좁은 trait에 의존합니다.
//! MongoDB 구현은 이 모듈에, 테스트용 인메모리 구현은 `crate::testing`에 있습니다.
//!
//! | trait | MongoDB 구현 | 용도 |
//! |-------|--------------|------|
//! | [`UserStore`] | [`UserRepository`] | 사용자 CRUD, 가입 트랜잭션 |
//! | [`PlanStore`] | [`PlanRepository`] | 요금제 할당 + 설정 조회, 수량 저장 |
//! | [`ResourceCounter`] | [`MongoResourceCounter`] | 쿼리/컬렉션/팀 개수 |
//!
//! # Examples
//!
//! ```rust,ignore
//! let user_repo: Arc<dyn UserStore> = Arc::new(UserRepository::new(database.clone()));
//! let user = user_repo.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

use thiserror::Error;
use mongodb::error::{ErrorKind, WriteFailure};

pub mod users;
pub mod plans;
pub mod stats;

pub use users::{UserStore, UserRepository};
pub use plans::{PlanStore, PlanRepository};
pub use stats::{ResourceCounter, ResourceKind, MongoResourceCounter};

/// MongoDB 중복 키 에러 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 저장소 계층 에러
///
/// 유니크 제약 위반만 따로 구분하고, 나머지는 모두 일반 데이터베이스 에러입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key_error(&err) {
            StoreError::UniqueViolation(err.to_string())
        } else {
            StoreError::Database(err.to_string())
        }
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        StoreError::Database(format!("BSON 역직렬화 실패: {}", err))
    }
}

/// 쓰기 실패가 유니크 인덱스 위반(E11000)인지 판별합니다.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::InsertMany(insert_many_error) => insert_many_error
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE)),
        _ => false,
    }
}
