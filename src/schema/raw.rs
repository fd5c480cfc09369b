// ==========================================
// 情景查看器配置核心 - 外部表线格式
// ==========================================
// 依据: VisionEval 情景数据格式 (category-cfg / scenario-cfg / output-cfg)
// 职责: 与外部表字节兼容的原始结构体 + 单元素数组规整编解码
// ==========================================
// 字段名必须按外部表原样保留:
// NAME / DESCRIPTION / LABEL / LEVELS / INPUTS / LEVEL /
// INSTRUCTIONS / METRIC / UNIT / COLUMN
// ==========================================

use crate::domain::{
    Category, CategoryLevel, InputFactor, InputLevel, InputReference, OutputMetric,
};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ==========================================
// WrappedText - 单元素数组包裹的文本字段
// ==========================================
// 类别表与情景表把所有标量写成单元素数组（"NAME": ["B"]），
// 输出表却用裸标量; 这是外部格式的历史不一致，在此规整:
// 反序列化兼容两种形状（数组取首元素），序列化固定还原数组形状
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrappedText(pub String);

impl WrappedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for WrappedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Scalar(String),
            Wrapped(Vec<String>),
        }

        let text = match Shape::deserialize(deserializer)? {
            Shape::Scalar(s) => s,
            // 空数组规整为空串，由 loader 统一报 MissingField
            Shape::Wrapped(v) => v.into_iter().next().unwrap_or_default(),
        };
        Ok(WrappedText(text))
    }
}

impl Serialize for WrappedText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(1))?;
        seq.serialize_element(&self.0)?;
        seq.end()
    }
}

// ==========================================
// 情景表 (scenario-cfg) 原始结构
// ==========================================

/// 输入因子原始记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputFactor {
    #[serde(rename = "NAME", default)]
    pub name: WrappedText,

    #[serde(rename = "LABEL", default)]
    pub label: WrappedText,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: WrappedText,

    #[serde(rename = "INSTRUCTIONS", default)]
    pub instructions: WrappedText,

    #[serde(rename = "LEVELS", default)]
    pub levels: Vec<RawInputLevel>,
}

/// 因子档位原始记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputLevel {
    #[serde(rename = "NAME", default)]
    pub name: WrappedText,

    #[serde(rename = "LABEL", default)]
    pub label: WrappedText,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: WrappedText,
}

// ==========================================
// 类别表 (category-cfg) 原始结构
// ==========================================

/// 类别原始记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "NAME", default)]
    pub name: WrappedText,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: WrappedText,

    #[serde(rename = "LEVELS", default)]
    pub levels: Vec<RawCategoryLevel>,
}

/// 类别档位原始记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategoryLevel {
    #[serde(rename = "NAME", default)]
    pub name: WrappedText,

    #[serde(rename = "INPUTS", default)]
    pub inputs: Vec<RawInputReference>,
}

/// 输入引用原始记录（NAME=因子代码, LEVEL=档位名）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputReference {
    #[serde(rename = "NAME", default)]
    pub name: WrappedText,

    #[serde(rename = "LEVEL", default)]
    pub level: WrappedText,
}

// ==========================================
// 输出表 (output-cfg) 原始结构
// ==========================================
// 输出表用裸标量，不走 WrappedText

/// 输出指标原始记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutputMetric {
    #[serde(rename = "NAME", default)]
    pub name: String,

    #[serde(rename = "LABEL", default)]
    pub label: String,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,

    #[serde(rename = "INSTRUCTIONS", default)]
    pub instructions: String,

    #[serde(rename = "METRIC", default)]
    pub metric: String,

    #[serde(rename = "UNIT", default)]
    pub unit: String,

    #[serde(rename = "COLUMN", default)]
    pub column: String,
}

// ==========================================
// 模型 -> 原始结构 回写（往返序列化）
// ==========================================

impl From<&InputLevel> for RawInputLevel {
    fn from(level: &InputLevel) -> Self {
        Self {
            name: WrappedText::new(&level.name),
            label: WrappedText::new(&level.label),
            description: WrappedText::new(&level.description),
        }
    }
}

impl From<&InputFactor> for RawInputFactor {
    fn from(factor: &InputFactor) -> Self {
        Self {
            name: WrappedText::new(&factor.code),
            label: WrappedText::new(&factor.label),
            description: WrappedText::new(&factor.description),
            instructions: WrappedText::new(&factor.instructions),
            levels: factor.levels.iter().map(RawInputLevel::from).collect(),
        }
    }
}

impl From<&InputReference> for RawInputReference {
    fn from(reference: &InputReference) -> Self {
        Self {
            name: WrappedText::new(&reference.factor_code),
            level: WrappedText::new(&reference.level_name),
        }
    }
}

impl From<&CategoryLevel> for RawCategoryLevel {
    fn from(level: &CategoryLevel) -> Self {
        Self {
            name: WrappedText::new(&level.name),
            inputs: level.inputs.iter().map(RawInputReference::from).collect(),
        }
    }
}

impl From<&Category> for RawCategory {
    fn from(category: &Category) -> Self {
        Self {
            name: WrappedText::new(&category.name),
            description: WrappedText::new(&category.description),
            levels: category.levels.iter().map(RawCategoryLevel::from).collect(),
        }
    }
}

impl From<&OutputMetric> for RawOutputMetric {
    fn from(metric: &OutputMetric) -> Self {
        Self {
            name: metric.name.clone(),
            label: metric.label.clone(),
            description: metric.description.clone(),
            instructions: metric.instructions.clone(),
            metric: metric.metric.clone(),
            unit: metric.unit.clone(),
            column: metric.column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_text_accepts_array_and_scalar() {
        // 数组形状（类别/情景表惯例）
        let wrapped: WrappedText = serde_json::from_str(r#"["B"]"#).unwrap();
        assert_eq!(wrapped.as_str(), "B");

        // 裸标量形状（输出表惯例）
        let scalar: WrappedText = serde_json::from_str(r#""B""#).unwrap();
        assert_eq!(scalar.as_str(), "B");

        // 空数组规整为空串
        let empty: WrappedText = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn test_wrapped_text_serializes_as_array() {
        let json = serde_json::to_string(&WrappedText::new("Bicycles")).unwrap();
        assert_eq!(json, r#"["Bicycles"]"#);
    }

    #[test]
    fn test_raw_factor_field_names_preserved() {
        let raw = RawInputFactor {
            name: WrappedText::new("B"),
            label: WrappedText::new("Bicycles"),
            description: WrappedText::new("desc"),
            instructions: WrappedText::new("instr"),
            levels: vec![RawInputLevel {
                name: WrappedText::new("1"),
                label: WrappedText::new("Base"),
                description: WrappedText::new("current"),
            }],
        };

        let value = serde_json::to_value(&raw).unwrap();
        assert!(value.get("NAME").is_some(), "NAME field should be preserved");
        assert!(value.get("LEVELS").is_some(), "LEVELS field should be preserved");
        assert_eq!(value["LEVELS"][0]["LABEL"][0], "Base");
    }
}
