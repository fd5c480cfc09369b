// ==========================================
// 情景查看器配置核心 - 输出指标实体
// ==========================================
// 依据: VisionEval 情景数据格式 (output-cfg 表)
// 职责: 输出指标列的不可变领域实体
// ==========================================

use serde::Serialize;

/// 未指定聚合口径时的缺省值
///
/// 源数据中只出现过 "Average" 一种口径，且未给出合法口径枚举，
/// 因此未知口径按原样透传，仅缺失/空值回落到该缺省
pub const DEFAULT_METRIC: &str = "Average";

// ==========================================
// OutputMetric - 输出指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputMetric {
    /// 结果表列名（输出表内唯一，如 "DVMTPerCapita"）
    pub column: String,

    /// 指标名称
    pub name: String,

    /// 显示标签
    pub label: String,

    /// 指标说明
    pub description: String,

    /// 操作提示文本
    pub instructions: String,

    /// 聚合口径（如 "Average"；未识别值按标签透传）
    pub metric: String,

    /// 单位文本（如 "%"、"daily miles"）
    pub unit: String,
}
