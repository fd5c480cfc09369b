// ==========================================
// 情景查看器配置核心 - 模型校验器
// ==========================================
// 职责: 对已装配模型整体复跑全部不变式，批量返回违规
// ==========================================
// 说明: loader 在装载时已做同等校验; 此处独立复核，
//       使任何来源的模型都能被审计（返回全部违规而非首条）
// ==========================================

use crate::domain::ScenarioModel;
use crate::schema::error::SchemaError;
use std::collections::HashSet;

/// 校验已装配的数据集模型
///
/// # 返回
/// - Ok(()): 全部不变式成立
/// - Err(Vec<SchemaError>): 发现的全部违规（非首条中断）
pub fn validate(model: &ScenarioModel) -> Result<(), Vec<SchemaError>> {
    let mut errors = Vec::new();

    validate_factors(model, &mut errors);
    validate_categories(model, &mut errors);
    validate_outputs(model, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// 因子集不变式: 代码/标签非空、代码唯一、档位非空且档位名唯一
fn validate_factors(model: &ScenarioModel, errors: &mut Vec<SchemaError>) {
    let mut seen_codes = HashSet::new();

    for factor in model.factors().iter() {
        let scope = format!("因子 {}", factor.code);

        if factor.code.is_empty() {
            errors.push(SchemaError::MissingField {
                scope: scope.clone(),
                field: "NAME".to_string(),
            });
        } else if !seen_codes.insert(factor.code.as_str()) {
            errors.push(SchemaError::DuplicateKey {
                scope: "情景因子表".to_string(),
                key: factor.code.clone(),
            });
        }

        if factor.label.is_empty() {
            errors.push(SchemaError::MissingField {
                scope: scope.clone(),
                field: "LABEL".to_string(),
            });
        }

        if factor.levels.is_empty() {
            errors.push(SchemaError::EmptyCollection {
                scope: scope.clone(),
                message: "因子不含任何档位".to_string(),
            });
        }

        let mut seen_levels = HashSet::new();
        for level in &factor.levels {
            if level.name.is_empty() {
                errors.push(SchemaError::MissingField {
                    scope: scope.clone(),
                    field: "NAME".to_string(),
                });
            } else if !seen_levels.insert(level.name.as_str()) {
                errors.push(SchemaError::DuplicateKey {
                    scope: scope.clone(),
                    key: level.name.clone(),
                });
            }

            if level.label.is_empty() {
                errors.push(SchemaError::MissingField {
                    scope: format!("{} 档位 {}", scope, level.name),
                    field: "LABEL".to_string(),
                });
            }
        }
    }
}

/// 类别不变式: 名称唯一、档位/引用非空、全部引用可解析
fn validate_categories(model: &ScenarioModel, errors: &mut Vec<SchemaError>) {
    let mut seen_names = HashSet::new();

    for category in model.categories() {
        let scope = format!("类别 {}", category.name);

        if category.name.is_empty() {
            errors.push(SchemaError::MissingField {
                scope: scope.clone(),
                field: "NAME".to_string(),
            });
        } else if !seen_names.insert(category.name.as_str()) {
            errors.push(SchemaError::DuplicateKey {
                scope: "类别表".to_string(),
                key: category.name.clone(),
            });
        }

        if category.levels.is_empty() {
            errors.push(SchemaError::EmptyCollection {
                scope: scope.clone(),
                message: "类别不含任何档位".to_string(),
            });
        }

        let mut seen_levels = HashSet::new();
        for level in &category.levels {
            let level_scope = format!("{} 档位 {}", scope, level.name);

            if level.name.is_empty() {
                errors.push(SchemaError::MissingField {
                    scope: level_scope.clone(),
                    field: "NAME".to_string(),
                });
            } else if !seen_levels.insert(level.name.as_str()) {
                errors.push(SchemaError::DuplicateKey {
                    scope: scope.clone(),
                    key: level.name.clone(),
                });
            }

            if level.inputs.is_empty() {
                errors.push(SchemaError::EmptyCollection {
                    scope: level_scope.clone(),
                    message: "档位不含任何输入引用".to_string(),
                });
            }

            for reference in &level.inputs {
                if model.resolve(reference).is_none() {
                    errors.push(SchemaError::DanglingReference {
                        category: category.name.clone(),
                        category_level: level.name.clone(),
                        factor_code: reference.factor_code.clone(),
                        level_name: reference.level_name.clone(),
                    });
                }
            }
        }
    }
}

/// 输出表不变式: 列名非空且唯一
fn validate_outputs(model: &ScenarioModel, errors: &mut Vec<SchemaError>) {
    let mut seen_columns = HashSet::new();

    for metric in model.output_metrics() {
        if metric.column.is_empty() {
            errors.push(SchemaError::MissingField {
                scope: format!("输出指标 {}", metric.name),
                field: "COLUMN".to_string(),
            });
            continue;
        }

        if !seen_columns.insert(metric.column.as_str()) {
            errors.push(SchemaError::DuplicateKey {
                scope: "输出指标表".to_string(),
                key: metric.column.clone(),
            });
        }
    }
}

// 违规模型无法经公开 loader 产出，审计路径在此用内部装配直接构造
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Category, CategoryLevel, FactorSet, InputFactor, InputLevel, InputReference, OutputMetric,
    };

    fn factor(code: &str, levels: &[&str]) -> InputFactor {
        InputFactor {
            code: code.to_string(),
            label: format!("{} label", code),
            description: String::new(),
            instructions: String::new(),
            levels: levels
                .iter()
                .map(|name| InputLevel {
                    name: name.to_string(),
                    label: format!("{} label", name),
                    description: String::new(),
                })
                .collect(),
        }
    }

    fn metric(column: &str) -> OutputMetric {
        OutputMetric {
            column: column.to_string(),
            name: column.to_string(),
            label: column.to_string(),
            description: String::new(),
            instructions: String::new(),
            metric: "Average".to_string(),
            unit: "%".to_string(),
        }
    }

    fn model(
        factors: Vec<InputFactor>,
        categories: Vec<Category>,
        outputs: Vec<OutputMetric>,
    ) -> ScenarioModel {
        ScenarioModel::assemble(
            "TEST".to_string(),
            FactorSet::from_factors(factors),
            categories,
            outputs,
        )
    }

    #[test]
    fn test_validate_clean_model() {
        let m = model(
            vec![factor("B", &["1", "2"])],
            vec![Category {
                name: "Bicycles".to_string(),
                description: String::new(),
                levels: vec![CategoryLevel {
                    name: "1".to_string(),
                    inputs: vec![InputReference {
                        factor_code: "B".to_string(),
                        level_name: "1".to_string(),
                    }],
                }],
            }],
            vec![metric("AveCost")],
        );

        assert!(validate(&m).is_ok());
    }

    #[test]
    fn test_validate_reports_dangling_reference() {
        let m = model(
            vec![factor("B", &["1"])],
            vec![Category {
                name: "Broken".to_string(),
                description: String::new(),
                levels: vec![CategoryLevel {
                    name: "1".to_string(),
                    inputs: vec![InputReference {
                        factor_code: "X".to_string(),
                        level_name: "1".to_string(),
                    }],
                }],
            }],
            vec![],
        );

        let errors = validate(&m).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            SchemaError::DanglingReference { factor_code, .. } if factor_code == "X"
        ));
    }

    #[test]
    fn test_validate_collects_all_violations() {
        // 空档位因子 + 空引用档位 + 重复输出列，一次审计全部暴露
        let m = model(
            vec![factor("E", &[])],
            vec![Category {
                name: "C".to_string(),
                description: String::new(),
                levels: vec![CategoryLevel {
                    name: "1".to_string(),
                    inputs: vec![],
                }],
            }],
            vec![metric("AveCost"), metric("AveCost")],
        );

        let errors = validate(&m).unwrap_err();
        assert_eq!(errors.len(), 3, "expected all violations, got {:?}", errors);
        assert!(errors
            .iter()
            .any(|e| matches!(e, SchemaError::EmptyCollection { scope, .. } if scope == "因子 E")));
        assert!(errors.iter().any(
            |e| matches!(e, SchemaError::EmptyCollection { scope, .. } if scope == "类别 C 档位 1")
        ));
        assert!(errors
            .iter()
            .any(|e| matches!(e, SchemaError::DuplicateKey { key, .. } if key == "AveCost")));
    }
}
