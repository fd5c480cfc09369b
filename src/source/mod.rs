// ==========================================
// 情景查看器配置核心 - 数据源层
// ==========================================
// 职责: 表文件获取与数据集目录装载（唯一做 I/O 的层）
// ==========================================

// 模块声明
pub mod dataset;
pub mod error;
pub mod js_table;

// 重导出核心类型
pub use dataset::{
    list_datasets, load_data_root, load_dataset, CATEGORY_FILE, OUTPUT_FILE, SCENARIO_FILE,
};
pub use error::{LoadError, LoadResult};
pub use js_table::{parse_js_table, strip_assignment_wrapper};
