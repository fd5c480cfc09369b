// ==========================================
// 情景查看器配置核心 - 表结构错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================
// 红线: 错误必须携带可定位标识符（因子/类别/档位名），
//       供使用者原样上报并回源修正数据
// ==========================================

use thiserror::Error;

/// 表结构错误类型
///
/// 所有错误批量收集后整体返回（`Vec<SchemaError>`），
/// 一次装载即暴露全部数据录入缺陷，不在首错中断
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    // ===== 字段缺失 =====
    #[error("必填字段缺失 ({scope}): 字段 {field} 为空")]
    MissingField {
        /// 所属范围（如 "因子 B" / "输出指标 #3"）
        scope: String,
        /// 缺失字段名（按外部表字段名，如 NAME / LABEL / COLUMN）
        field: String,
    },

    // ===== 键重复 =====
    #[error("键重复 ({scope}): {key} 在其作用域内出现多次")]
    DuplicateKey {
        /// 所属范围（如 "因子表" / "类别 Bicycles"）
        scope: String,
        /// 重复的代码/名称
        key: String,
    },

    // ===== 悬空引用 =====
    #[error(
        "悬空引用 (类别 {category}, 档位 {category_level}): 引用因子 {factor_code} 档位 {level_name} 不存在"
    )]
    DanglingReference {
        /// 引用所在类别名
        category: String,
        /// 引用所在类别档位名
        category_level: String,
        /// 被引用的因子代码
        factor_code: String,
        /// 被引用的档位名
        level_name: String,
    },

    // ===== 空集合 =====
    #[error("集合为空 ({scope}): {message}")]
    EmptyCollection {
        /// 所属范围
        scope: String,
        /// 说明文本
        message: String,
    },
}

/// Result 类型别名（批量错误语义）
pub type SchemaResult<T> = Result<T, Vec<SchemaError>>;
