// ==========================================
// 情景查看器配置核心 - 领域模型层
// ==========================================
// 依据: VisionEval 情景数据格式 (三张配置表)
// ==========================================
// 职责: 定义装配后的不可变领域实体与只读模型
// 红线: 不含解析逻辑,不含校验逻辑,不含文件访问
// ==========================================

pub mod category;
pub mod factor;
pub mod model;
pub mod output;

// 重导出核心类型
pub use category::{Category, CategoryLevel, InputReference};
pub use factor::{FactorSet, InputFactor, InputLevel};
pub use model::ScenarioModel;
pub use output::{OutputMetric, DEFAULT_METRIC};
