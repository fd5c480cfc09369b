// ==========================================
// 情景查看器配置核心 - 表结构层
// ==========================================
// 职责: 外部表线格式、装载、校验与错误类型
// ==========================================

// 模块声明
pub mod error;
pub mod loader;
pub mod raw;
pub mod validator;

// 重导出核心类型
pub use error::{SchemaError, SchemaResult};
pub use loader::{load_categories, load_input_factors, load_model, load_output_metrics};
pub use raw::{
    RawCategory, RawCategoryLevel, RawInputFactor, RawInputLevel, RawInputReference,
    RawOutputMetric, WrappedText,
};
pub use validator::validate;
