// ==========================================
// 情景查看器配置核心 - 数据集模型
// ==========================================
// 职责: 单个数据集变体（如 VERPAT / VERSPM）装配后的只读模型
// 红线: 装配后不可变; 任意数量消费者可无锁并发读取
// ==========================================

use crate::domain::category::{Category, InputReference};
use crate::domain::factor::{FactorSet, InputFactor, InputLevel};
use crate::domain::output::OutputMetric;
use std::collections::HashMap;

// ==========================================
// ScenarioModel - 数据集模型
// ==========================================
// 三张表装配为一个整体; 索引在装配时一次性构建
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioModel {
    /// 数据集变体名（如 "VERSPM"; 内存直装时可为空串）
    dataset: String,

    /// 输入因子集合（含代码/档位索引）
    factors: FactorSet,

    /// 类别序列（保持表内顺序）
    categories: Vec<Category>,

    /// 类别名 -> categories 下标
    category_index: HashMap<String, usize>,

    /// 输出指标序列（保持表内顺序）
    outputs: Vec<OutputMetric>,

    /// 列名 -> outputs 下标
    output_index: HashMap<String, usize>,
}

impl ScenarioModel {
    /// 从已加载的三部分装配模型并构建索引
    ///
    /// 调用方（loader）负责保证名称唯一性，此处不做校验
    pub(crate) fn assemble(
        dataset: String,
        factors: FactorSet,
        categories: Vec<Category>,
        outputs: Vec<OutputMetric>,
    ) -> Self {
        let category_index = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();

        let output_index = outputs
            .iter()
            .enumerate()
            .map(|(i, o)| (o.column.clone(), i))
            .collect();

        Self {
            dataset,
            factors,
            categories,
            category_index,
            outputs,
            output_index,
        }
    }

    /// 数据集变体名
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// 因子集合
    pub fn factors(&self) -> &FactorSet {
        &self.factors
    }

    /// 按因子代码查找输入因子
    pub fn factor(&self, code: &str) -> Option<&InputFactor> {
        self.factors.factor(code)
    }

    /// 按 (因子代码, 档位名) 查找因子档位
    pub fn input_level(&self, code: &str, level_name: &str) -> Option<&InputLevel> {
        self.factors.level(code, level_name)
    }

    /// 按类别名查找类别
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.category_index.get(name).map(|&i| &self.categories[i])
    }

    /// 按表内顺序遍历类别
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// 按列名查找输出指标
    pub fn output_metric(&self, column: &str) -> Option<&OutputMetric> {
        self.output_index.get(column).map(|&i| &self.outputs[i])
    }

    /// 按表内顺序遍历输出指标
    pub fn output_metrics(&self) -> impl Iterator<Item = &OutputMetric> {
        self.outputs.iter()
    }

    /// 解析输入引用为 (因子, 档位)
    ///
    /// 通过校验的模型内所有引用均可解析; 返回 None 只会
    /// 出现在带悬空引用、尚未通过校验的模型上
    pub fn resolve(&self, reference: &InputReference) -> Option<(&InputFactor, &InputLevel)> {
        let factor = self.factors.factor(&reference.factor_code)?;
        let level = self
            .factors
            .level(&reference.factor_code, &reference.level_name)?;
        Some((factor, level))
    }
}
