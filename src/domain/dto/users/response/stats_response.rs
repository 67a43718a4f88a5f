use serde::{Deserialize, Serialize};

/// 사용자가 소유한 수(`own`)와 접근 가능한 수(`access`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnAccessCount {
    pub own: u64,
    pub access: u64,
}

/// `GET /user/stats` 응답
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub queries: OwnAccessCount,
    pub collections: OwnAccessCount,
    pub teams: OwnAccessCount,
}
