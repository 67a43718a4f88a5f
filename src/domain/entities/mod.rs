//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 매핑되는 도메인 엔티티를 정의합니다.
//!
//! ```text
//! users ──1:1── workspaces (기본 워크스페이스)
//!   │  └─0..1── user_credentials (외부 프로바이더 계정)
//!   └──0..1──── user_plans ──N:1── plan_configs
//! ```
//!
//! 모든 엔티티는 `serde`로 BSON 직렬화되며 `_id`는 `Option<ObjectId>`로
//! 표현되어 삽입 전에는 비어 있습니다. 요금제 설정(`plan_configs`)만
//! 사람이 읽을 수 있는 문자열 ID(`"basic"` 등)를 사용합니다.

pub mod users;
pub mod plans;
pub mod workspaces;

pub use users::*;
pub use plans::*;
pub use workspaces::*;
