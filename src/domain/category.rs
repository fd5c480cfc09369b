// ==========================================
// 情景查看器配置核心 - 类别实体
// ==========================================
// 依据: VisionEval 情景数据格式 (category-cfg 表)
// 职责: 类别、类别档位与输入引用的不可变领域实体
// ==========================================

use serde::Serialize;

// ==========================================
// InputReference - 输入引用
// ==========================================
// 指向某个 InputFactor 的某个档位的 (代码, 档位名) 对;
// 是否可解析由 loader/validator 对照 FactorSet 判定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReference {
    /// 被引用的因子代码（如 "B"）
    pub factor_code: String,

    /// 被引用的档位名（如 "1"）
    pub level_name: String,
}

// ==========================================
// CategoryLevel - 类别档位
// ==========================================
// 档位名同样是非透明标识符:
// VERSPM 的 "Vehicles/Fuels" 类别使用 "0","1","2"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLevel {
    /// 档位名（类别内唯一）
    pub name: String,

    /// 本档位捆绑的输入引用（保持表内顺序）
    pub inputs: Vec<InputReference>,
}

impl CategoryLevel {
    /// 按因子代码查找本档位内的引用
    pub fn input(&self, factor_code: &str) -> Option<&InputReference> {
        self.inputs.iter().find(|r| r.factor_code == factor_code)
    }
}

// ==========================================
// Category - 组合情景类别
// ==========================================
// 把若干因子档位打包为一个对规划者可见的组合选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// 类别名（数据集内唯一，如 "Community Design"）
    pub name: String,

    /// 类别说明
    pub description: String,

    /// 档位序列（保持表内顺序）
    pub levels: Vec<CategoryLevel>,
}

impl Category {
    /// 按档位名查找类别档位
    pub fn level(&self, name: &str) -> Option<&CategoryLevel> {
        self.levels.iter().find(|l| l.name == name)
    }
}
