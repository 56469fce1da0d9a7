//! 国际象棋 AI 引擎
//!
//! 包含:
//! - 子力评估函数
//! - 固定深度 Minimax + Alpha-Beta 搜索
//! - 按难度分级的走法选择（Easy 随机，Medium/Hard 搜索）
//!
//! 搜索对传入的对局状态只读，选出的走法由调用方通过规则引擎执行。

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine, Difficulty};
