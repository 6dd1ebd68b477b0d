mod block;
mod descriptor;
mod error;
mod stats;

pub use block::*;
pub use descriptor::*;
pub use error::*;
pub use stats::*;

use serde::{Deserialize, Serialize};

// 规则定义,块按执行顺序排列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    pub blocks: Vec<BlockDefinition>,
}

// 配置方案定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefinition {
    pub name: String,
    pub rules: Vec<RuleDefinition>,
}
