use serde::{Deserialize, Serialize};

/// 作业总数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentCountResponse {
    pub count: u64,
}
