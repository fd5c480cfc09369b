// ==========================================
// 情景查看器配置核心 - 核心库
// ==========================================
// 依据: VisionEval 情景查看器数据格式 (VERPAT / VERSPM)
// 技术栈: Rust + serde
// 系统定位: 配置装载与校验核心 (图表渲染/结果比较由外部消费方负责)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 装配后的不可变实体与只读模型
pub mod domain;

// 表结构层 - 线格式、装载、校验
pub mod schema;

// 数据源层 - 表文件获取 (唯一做 I/O 的层)
pub mod source;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体与模型
pub use domain::{
    Category, CategoryLevel, FactorSet, InputFactor, InputLevel, InputReference, OutputMetric,
    ScenarioModel, DEFAULT_METRIC,
};

// 装载与校验
pub use schema::{
    load_categories, load_input_factors, load_model, load_output_metrics, validate, SchemaError,
    SchemaResult,
};

// 数据源
pub use source::{load_data_root, load_dataset, LoadError, LoadResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "情景查看器配置核心";
