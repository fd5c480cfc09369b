// ==========================================
// 情景查看器配置核心 - 数据源层错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use crate::schema::SchemaError;
use thiserror::Error;

/// 数据源层错误类型
#[derive(Error, Debug)]
pub enum LoadError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .js/.json）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 解析错误 =====
    #[error("赋值包装解析失败 ({path}): {message}")]
    WrapperParseError { path: String, message: String },

    #[error("JSON 解析失败 ({path}): {message}")]
    JsonParseError { path: String, message: String },

    // ===== 数据集错误 =====
    #[error("数据集目录无效: {0}")]
    InvalidDatasetDir(String),

    #[error("配置校验未通过 (数据集 {dataset}): 共 {} 项违规", .errors.len())]
    SchemaViolations {
        dataset: String,
        errors: Vec<SchemaError>,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;
