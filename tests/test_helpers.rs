// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供原始表构建器与临时数据集目录生成
// ==========================================

#![allow(dead_code)]

use scenario_viewer_config::schema::{
    RawCategory, RawCategoryLevel, RawInputFactor, RawInputLevel, RawInputReference,
    RawOutputMetric, WrappedText,
};
use std::error::Error;
use std::fs;
use tempfile::TempDir;

// ==========================================
// 原始表构建器
// ==========================================

/// 构建输入因子原始记录
///
/// # 参数
/// - levels: (档位名, 档位标签) 列表
pub fn factor(code: &str, label: &str, levels: &[(&str, &str)]) -> RawInputFactor {
    RawInputFactor {
        name: WrappedText::new(code),
        label: WrappedText::new(label),
        description: WrappedText::new(format!("{} description", label)),
        instructions: WrappedText::new(format!("{} instructions", label)),
        levels: levels
            .iter()
            .map(|(name, level_label)| RawInputLevel {
                name: WrappedText::new(*name),
                label: WrappedText::new(*level_label),
                description: WrappedText::new(format!("{} level", level_label)),
            })
            .collect(),
    }
}

/// 构建类别原始记录
///
/// # 参数
/// - levels: (档位名, [(因子代码, 档位名)]) 列表
pub fn category(name: &str, levels: &[(&str, &[(&str, &str)])]) -> RawCategory {
    RawCategory {
        name: WrappedText::new(name),
        description: WrappedText::new(format!("{} description", name)),
        levels: levels
            .iter()
            .map(|(level_name, inputs)| RawCategoryLevel {
                name: WrappedText::new(*level_name),
                inputs: inputs
                    .iter()
                    .map(|(code, level)| RawInputReference {
                        name: WrappedText::new(*code),
                        level: WrappedText::new(*level),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// 构建输出指标原始记录（口径固定 "Average"）
pub fn output(column: &str, name: &str, unit: &str) -> RawOutputMetric {
    RawOutputMetric {
        name: name.to_string(),
        label: name.to_string(),
        description: format!("{} description", name),
        instructions: format!("{} instructions", name),
        metric: "Average".to_string(),
        unit: unit.to_string(),
        column: column.to_string(),
    }
}

// ==========================================
// VERSPM 风格的小型合法数据集
// ==========================================

/// 五个输入因子（代码与 VERSPM 情景表一致）
pub fn sample_factors() -> Vec<RawInputFactor> {
    vec![
        factor("B", "Bicycles", &[("1", "Base"), ("2", "Double")]),
        factor("D", "Demand Management", &[("1", "Base"), ("2", "Expanded")]),
        factor(
            "L",
            "Land Use",
            &[("1", "Base"), ("2", "Activity Center Growth")],
        ),
        factor("P", "Parking", &[("1", "Base"), ("2", "Increased")]),
        factor("T", "Transit", &[("1", "Base"), ("2", "Double")]),
    ]
}

/// 两个类别: 单因子的 Bicycles + 捆绑四因子的 Community Design
pub fn sample_categories() -> Vec<RawCategory> {
    vec![
        category("Bicycles", &[("1", &[("B", "1")]), ("2", &[("B", "2")])]),
        category(
            "Community Design",
            &[
                ("1", &[("L", "1"), ("B", "1"), ("T", "1"), ("P", "1")]),
                ("2", &[("L", "2"), ("B", "1"), ("T", "2"), ("P", "1")]),
            ],
        ),
    ]
}

/// 三个输出指标
pub fn sample_outputs() -> Vec<RawOutputMetric> {
    vec![
        output("GHGReduction", "GHG Target Reduction", "%"),
        output("DVMTPerCapita", "DVMT Per Capita", "daily miles"),
        output("AveCost", "Annual Travel Cost", "USD"),
    ]
}

// ==========================================
// 临时数据集目录
// ==========================================

/// 把三张原始表写成 JS 赋值文件，生成一个数据集变体目录
///
/// # 返回
/// - TempDir: 临时根目录（需要保持存活）
/// - 变体目录位于 `<root>/<dataset>`
pub fn write_dataset_dir(
    dataset: &str,
    factors: &[RawInputFactor],
    categories: &[RawCategory],
    outputs: &[RawOutputMetric],
) -> Result<TempDir, Box<dyn Error>> {
    let root = TempDir::new()?;
    write_dataset_into(root.path(), dataset, factors, categories, outputs)?;
    Ok(root)
}

/// 往已有根目录下写一个数据集变体目录
pub fn write_dataset_into(
    root: &std::path::Path,
    dataset: &str,
    factors: &[RawInputFactor],
    categories: &[RawCategory],
    outputs: &[RawOutputMetric],
) -> Result<(), Box<dyn Error>> {
    let dir = root.join(dataset);
    fs::create_dir_all(&dir)?;

    fs::write(
        dir.join("scenario-cfg.js"),
        format!(
            "var scenconfig = {};\n",
            serde_json::to_string_pretty(factors)?
        ),
    )?;
    fs::write(
        dir.join("category-cfg.js"),
        format!(
            "var catconfig = {};\n",
            serde_json::to_string_pretty(categories)?
        ),
    )?;
    fs::write(
        dir.join("output-cfg.js"),
        format!(
            "var outputcfg = {};\n",
            serde_json::to_string_pretty(outputs)?
        ),
    )?;

    Ok(())
}
