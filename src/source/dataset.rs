// ==========================================
// 情景查看器配置核心 - 数据集目录装载
// ==========================================
// 职责: 按数据集变体目录（如 VERPAT / VERSPM）装载三张表，
//       产出通过校验的只读模型
// ==========================================
// 目录约定: <root>/<变体名>/{scenario-cfg.js, category-cfg.js, output-cfg.js}
// 各变体相互独立，装载互不共享状态
// ==========================================

use crate::domain::ScenarioModel;
use crate::schema::loader::load_model;
use crate::schema::raw::{RawCategory, RawInputFactor, RawOutputMetric};
use crate::source::error::{LoadError, LoadResult};
use crate::source::js_table::parse_js_table;
use std::path::{Path, PathBuf};

/// 类别表文件名
pub const CATEGORY_FILE: &str = "category-cfg.js";

/// 情景（输入因子）表文件名
pub const SCENARIO_FILE: &str = "scenario-cfg.js";

/// 输出指标表文件名
pub const OUTPUT_FILE: &str = "output-cfg.js";

/// 装载单个数据集变体目录
///
/// # 参数
/// - dir: 变体目录（目录名即数据集名）
///
/// # 返回
/// - Ok(ScenarioModel): 三张表全部合法，模型已装配
/// - Err(LoadError): 文件/解析失败，或携带全部违规的 SchemaViolations
pub fn load_dataset(dir: &Path) -> LoadResult<ScenarioModel> {
    if !dir.is_dir() {
        return Err(LoadError::InvalidDatasetDir(dir.display().to_string()));
    }

    let dataset = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!(dataset = %dataset, "装载数据集目录");

    let factors_raw: Vec<RawInputFactor> = parse_js_table(&dir.join(SCENARIO_FILE))?;
    let categories_raw: Vec<RawCategory> = parse_js_table(&dir.join(CATEGORY_FILE))?;
    let outputs_raw: Vec<RawOutputMetric> = parse_js_table(&dir.join(OUTPUT_FILE))?;

    let model = load_model(dataset.clone(), factors_raw, categories_raw, outputs_raw)
        .map_err(|errors| LoadError::SchemaViolations { dataset, errors })?;

    tracing::info!(
        dataset = %model.dataset(),
        factors = model.factors().len(),
        categories = model.categories().count(),
        outputs = model.output_metrics().count(),
        "数据集装载完成"
    );

    Ok(model)
}

/// 枚举数据根目录下的全部变体目录（按目录名排序）
///
/// 只识别包含情景表文件的子目录，其余一律跳过
pub fn list_datasets(root: &Path) -> LoadResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(LoadError::InvalidDatasetDir(root.display().to_string()));
    }

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() && path.join(SCENARIO_FILE).exists() {
            dirs.push(path);
        }
    }
    dirs.sort();

    Ok(dirs)
}

/// 装载数据根目录下的全部变体
///
/// 各变体独立装载; 任一变体失败即整体失败（不产出半套模型）
pub fn load_data_root(root: &Path) -> LoadResult<Vec<ScenarioModel>> {
    let dirs = list_datasets(root)?;
    if dirs.is_empty() {
        return Err(LoadError::InvalidDatasetDir(format!(
            "{} 下无任何数据集变体目录",
            root.display()
        )));
    }

    dirs.iter().map(|dir| load_dataset(dir)).collect()
}
