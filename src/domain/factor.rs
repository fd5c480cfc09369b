// ==========================================
// 情景查看器配置核心 - 输入因子实体
// ==========================================
// 依据: VisionEval 情景数据格式 (scenario-cfg 表)
// 职责: 输入因子与因子档位的不可变领域实体
// ==========================================

use serde::Serialize;
use std::collections::HashMap;

// ==========================================
// InputLevel - 因子档位
// ==========================================
// 档位名是父因子内唯一的非透明标识符（如 "1"、"2"），
// 不保证从 0 或 1 起连续，禁止当作数组下标使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputLevel {
    /// 档位名（因子内唯一）
    pub name: String,

    /// 显示标签（如 "Base"、"Double"）
    pub label: String,

    /// 档位说明
    pub description: String,
}

// ==========================================
// InputFactor - 输入因子
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFactor {
    /// 因子代码（如 "B"、"D"、"L"，数据集内唯一）
    pub code: String,

    /// 显示标签（如 "Bicycles"）
    pub label: String,

    /// 因子说明
    pub description: String,

    /// 操作提示文本
    pub instructions: String,

    /// 档位序列（保持表内顺序）
    pub levels: Vec<InputLevel>,
}

impl InputFactor {
    /// 按档位名查找档位（线性扫描，索引化查找走 FactorSet）
    pub fn level(&self, name: &str) -> Option<&InputLevel> {
        self.levels.iter().find(|l| l.name == name)
    }
}

// ==========================================
// FactorSet - 因子集合（含查找索引）
// ==========================================
// 索引在 load_input_factors 中一次性构建，
// 后续所有引用解析均为 O(1) 均摊查找
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSet {
    /// 因子序列（保持表内顺序）
    factors: Vec<InputFactor>,

    /// 因子代码 -> factors 下标
    code_index: HashMap<String, usize>,

    /// 因子代码 -> (档位名 -> levels 下标)
    level_index: HashMap<String, HashMap<String, usize>>,
}

impl FactorSet {
    /// 从已去重的因子序列构建集合与索引
    ///
    /// 调用方（loader）负责保证代码与档位名唯一；
    /// 此处仅做索引构建，不做校验
    pub(crate) fn from_factors(factors: Vec<InputFactor>) -> Self {
        let mut code_index = HashMap::new();
        let mut level_index = HashMap::new();

        for (fi, factor) in factors.iter().enumerate() {
            code_index.insert(factor.code.clone(), fi);

            let mut levels = HashMap::new();
            for (li, level) in factor.levels.iter().enumerate() {
                levels.insert(level.name.clone(), li);
            }
            level_index.insert(factor.code.clone(), levels);
        }

        Self {
            factors,
            code_index,
            level_index,
        }
    }

    /// 按因子代码查找
    pub fn factor(&self, code: &str) -> Option<&InputFactor> {
        self.code_index.get(code).map(|&i| &self.factors[i])
    }

    /// 按 (因子代码, 档位名) 查找档位
    pub fn level(&self, code: &str, level_name: &str) -> Option<&InputLevel> {
        let factor_idx = *self.code_index.get(code)?;
        let level_idx = *self.level_index.get(code)?.get(level_name)?;
        Some(&self.factors[factor_idx].levels[level_idx])
    }

    /// 是否存在 (因子代码, 档位名) 对应档位
    pub fn contains_level(&self, code: &str, level_name: &str) -> bool {
        self.level(code, level_name).is_some()
    }

    /// 按表内顺序遍历因子
    pub fn iter(&self) -> impl Iterator<Item = &InputFactor> {
        self.factors.iter()
    }

    /// 因子数量
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// 是否为空集
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
