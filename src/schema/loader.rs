// ==========================================
// 情景查看器配置核心 - 表加载器
// ==========================================
// 职责: 原始表 -> 领域模型的单趟装载 + 批量错误收集
// ==========================================
// 红线: 纯转换，无 I/O，无重试; 任何非空错误列表
//       都意味着"配置不可用"，不存在可用的半成品模型
// ==========================================

use crate::domain::{
    Category, CategoryLevel, FactorSet, InputFactor, InputLevel, InputReference, OutputMetric,
    ScenarioModel, DEFAULT_METRIC,
};
use crate::schema::error::{SchemaError, SchemaResult};
use crate::schema::raw::{RawCategory, RawInputFactor, RawOutputMetric};
use std::collections::HashSet;

// ==========================================
// 情景表装载
// ==========================================

/// 装载输入因子表并构建查找索引
///
/// # 校验
/// - NAME（因子代码）与 LABEL 非空
/// - 因子代码在表内唯一
/// - 每个因子至少一个档位; 档位 NAME/LABEL 非空且档位名因子内唯一
///
/// # 返回
/// - Ok(FactorSet): 全部记录合法，索引已构建
/// - Err(Vec<SchemaError>): 表内发现的全部违规
pub fn load_input_factors(raw: Vec<RawInputFactor>) -> SchemaResult<FactorSet> {
    let (factors, errors) = collect_input_factors(raw);
    if errors.is_empty() {
        Ok(factors)
    } else {
        Err(errors)
    }
}

/// 内部装载: 返回可解析引用用的部分因子集 + 全部违规
///
/// load_model 在因子表有错时仍用部分因子集继续装载类别表，
/// 使单趟装载能同时暴露两张表的缺陷
pub(crate) fn collect_input_factors(
    raw: Vec<RawInputFactor>,
) -> (FactorSet, Vec<SchemaError>) {
    let mut errors = Vec::new();
    let mut factors = Vec::new();
    let mut seen_codes = HashSet::new();

    for (idx, record) in raw.into_iter().enumerate() {
        let code = record.name.0;
        let scope = if code.is_empty() {
            format!("因子 #{}", idx + 1)
        } else {
            format!("因子 {}", code)
        };

        if code.is_empty() {
            errors.push(SchemaError::MissingField {
                scope: scope.clone(),
                field: "NAME".to_string(),
            });
        } else if !seen_codes.insert(code.clone()) {
            errors.push(SchemaError::DuplicateKey {
                scope: "情景因子表".to_string(),
                key: code.clone(),
            });
            // 重复代码的记录不再入集，首条生效
            continue;
        }

        if record.label.as_str().is_empty() {
            errors.push(SchemaError::MissingField {
                scope: scope.clone(),
                field: "LABEL".to_string(),
            });
        }

        if record.levels.is_empty() {
            errors.push(SchemaError::EmptyCollection {
                scope: scope.clone(),
                message: "因子不含任何档位".to_string(),
            });
        }

        let mut levels = Vec::new();
        let mut seen_levels = HashSet::new();

        for (level_idx, raw_level) in record.levels.into_iter().enumerate() {
            let level_name = raw_level.name.0;
            let level_scope = if level_name.is_empty() {
                format!("{} 档位 #{}", scope, level_idx + 1)
            } else {
                format!("{} 档位 {}", scope, level_name)
            };

            if level_name.is_empty() {
                errors.push(SchemaError::MissingField {
                    scope: level_scope.clone(),
                    field: "NAME".to_string(),
                });
            } else if !seen_levels.insert(level_name.clone()) {
                errors.push(SchemaError::DuplicateKey {
                    scope: scope.clone(),
                    key: level_name.clone(),
                });
            }

            if raw_level.label.as_str().is_empty() {
                errors.push(SchemaError::MissingField {
                    scope: level_scope,
                    field: "LABEL".to_string(),
                });
            }

            levels.push(InputLevel {
                name: level_name,
                label: raw_level.label.0,
                description: raw_level.description.0,
            });
        }

        if !code.is_empty() {
            factors.push(InputFactor {
                code,
                label: record.label.0,
                description: record.description.0,
                instructions: record.instructions.0,
                levels,
            });
        }
    }

    (FactorSet::from_factors(factors), errors)
}

// ==========================================
// 类别表装载
// ==========================================

/// 装载类别表并对照因子集解析全部输入引用
///
/// # 校验
/// - 类别 NAME 非空且表内唯一
/// - 每个类别至少一个档位; 档位名类别内唯一
/// - 每个类别档位至少一个输入引用
/// - 每个引用的 (因子代码, 档位名) 必须解析到唯一档位，
///   否则报 DanglingReference（携带类别/档位/引用标识）
pub fn load_categories(
    raw: Vec<RawCategory>,
    factors: &FactorSet,
) -> SchemaResult<Vec<Category>> {
    let mut errors = Vec::new();
    let mut categories = Vec::new();
    let mut seen_names = HashSet::new();

    for (idx, record) in raw.into_iter().enumerate() {
        let name = record.name.0;
        let scope = if name.is_empty() {
            format!("类别 #{}", idx + 1)
        } else {
            format!("类别 {}", name)
        };

        if name.is_empty() {
            errors.push(SchemaError::MissingField {
                scope: scope.clone(),
                field: "NAME".to_string(),
            });
        } else if !seen_names.insert(name.clone()) {
            errors.push(SchemaError::DuplicateKey {
                scope: "类别表".to_string(),
                key: name.clone(),
            });
            continue;
        }

        if record.levels.is_empty() {
            errors.push(SchemaError::EmptyCollection {
                scope: scope.clone(),
                message: "类别不含任何档位".to_string(),
            });
        }

        let mut levels = Vec::new();
        let mut seen_levels = HashSet::new();

        for (level_idx, raw_level) in record.levels.into_iter().enumerate() {
            let level_name = raw_level.name.0;
            let level_scope = if level_name.is_empty() {
                format!("{} 档位 #{}", scope, level_idx + 1)
            } else {
                format!("{} 档位 {}", scope, level_name)
            };

            if level_name.is_empty() {
                errors.push(SchemaError::MissingField {
                    scope: level_scope.clone(),
                    field: "NAME".to_string(),
                });
            } else if !seen_levels.insert(level_name.clone()) {
                errors.push(SchemaError::DuplicateKey {
                    scope: scope.clone(),
                    key: level_name.clone(),
                });
            }

            if raw_level.inputs.is_empty() {
                errors.push(SchemaError::EmptyCollection {
                    scope: level_scope.clone(),
                    message: "档位不含任何输入引用".to_string(),
                });
            }

            let mut inputs = Vec::new();
            for raw_input in raw_level.inputs {
                let factor_code = raw_input.name.0;
                let ref_level = raw_input.level.0;

                if factor_code.is_empty() {
                    errors.push(SchemaError::MissingField {
                        scope: level_scope.clone(),
                        field: "NAME".to_string(),
                    });
                } else if ref_level.is_empty() {
                    errors.push(SchemaError::MissingField {
                        scope: level_scope.clone(),
                        field: "LEVEL".to_string(),
                    });
                } else if !factors.contains_level(&factor_code, &ref_level) {
                    // 代码或档位任一不可解析都算悬空，一个引用只报一条
                    errors.push(SchemaError::DanglingReference {
                        category: name.clone(),
                        category_level: level_name.clone(),
                        factor_code: factor_code.clone(),
                        level_name: ref_level.clone(),
                    });
                }

                inputs.push(InputReference {
                    factor_code,
                    level_name: ref_level,
                });
            }

            levels.push(CategoryLevel {
                name: level_name,
                inputs,
            });
        }

        if !name.is_empty() {
            categories.push(Category {
                name,
                description: record.description.0,
                levels,
            });
        }
    }

    if errors.is_empty() {
        Ok(categories)
    } else {
        Err(errors)
    }
}

// ==========================================
// 输出表装载
// ==========================================

/// 装载输出指标表
///
/// # 校验
/// - COLUMN 非空且表内唯一
/// - METRIC 缺失/为空回落到 "Average"; 未识别口径按标签透传，不报错
pub fn load_output_metrics(raw: Vec<RawOutputMetric>) -> SchemaResult<Vec<OutputMetric>> {
    let mut errors = Vec::new();
    let mut outputs = Vec::new();
    let mut seen_columns = HashSet::new();

    for (idx, record) in raw.into_iter().enumerate() {
        let scope = if record.name.is_empty() {
            format!("输出指标 #{}", idx + 1)
        } else {
            format!("输出指标 {}", record.name)
        };

        if record.column.is_empty() {
            errors.push(SchemaError::MissingField {
                scope,
                field: "COLUMN".to_string(),
            });
            continue;
        }

        if !seen_columns.insert(record.column.clone()) {
            errors.push(SchemaError::DuplicateKey {
                scope: "输出指标表".to_string(),
                key: record.column.clone(),
            });
            continue;
        }

        let metric = if record.metric.is_empty() {
            DEFAULT_METRIC.to_string()
        } else {
            record.metric
        };

        outputs.push(OutputMetric {
            column: record.column,
            name: record.name,
            label: record.label,
            description: record.description,
            instructions: record.instructions,
            metric,
            unit: record.unit,
        });
    }

    if errors.is_empty() {
        Ok(outputs)
    } else {
        Err(errors)
    }
}

// ==========================================
// 整体装载
// ==========================================

/// 一趟装载三张表并装配为数据集模型
///
/// 因子表有错时仍继续装载类别表（对照部分因子集），
/// 使一次调用能暴露全部表的违规; 任何错误都不产出模型
pub fn load_model(
    dataset: impl Into<String>,
    factors_raw: Vec<RawInputFactor>,
    categories_raw: Vec<RawCategory>,
    outputs_raw: Vec<RawOutputMetric>,
) -> SchemaResult<ScenarioModel> {
    let (factors, mut errors) = collect_input_factors(factors_raw);

    let categories = match load_categories(categories_raw, &factors) {
        Ok(categories) => categories,
        Err(mut category_errors) => {
            errors.append(&mut category_errors);
            Vec::new()
        }
    };

    let outputs = match load_output_metrics(outputs_raw) {
        Ok(outputs) => outputs,
        Err(mut output_errors) => {
            errors.append(&mut output_errors);
            Vec::new()
        }
    };

    if errors.is_empty() {
        Ok(ScenarioModel::assemble(
            dataset.into(),
            factors,
            categories,
            outputs,
        ))
    } else {
        Err(errors)
    }
}
