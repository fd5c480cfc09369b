// ==========================================
// 情景查看器配置核心 - JS 表文件解析器
// ==========================================
// 职责: 读取 "var xxx = [...]" 形式的配置表文件，
//       剥离赋值包装后按 JSON 解析为原始记录序列
// ==========================================
// 线格式: 查看器数据目录中的表以 JavaScript 赋值文件分发
//         (category-cfg.js / scenario-cfg.js / output-cfg.js)，
//         赋值体本身是合法 JSON
// ==========================================

use crate::source::error::{LoadError, LoadResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// 剥离 JS 赋值包装，返回 JSON 表体
///
/// 兼容 `var`/`let`/`const` 三种声明与可选的结尾分号；
/// 文件直接以 `[` 开头时视为裸 JSON 表体原样返回
pub fn strip_assignment_wrapper(text: &str) -> Result<&str, String> {
    let trimmed = text.trim();

    // 裸 JSON 表体
    if trimmed.starts_with('[') {
        return Ok(trimmed.trim_end_matches(';').trim_end());
    }

    let rest = ["var", "let", "const"]
        .iter()
        .find_map(|kw| trimmed.strip_prefix(kw))
        .ok_or_else(|| "缺少 var/let/const 声明".to_string())?;

    // 关键字后必须是空白 + 标识符 + '='
    if !rest.starts_with(char::is_whitespace) {
        return Err("缺少 var/let/const 声明".to_string());
    }

    let (ident, body) = rest
        .split_once('=')
        .ok_or_else(|| "缺少 '=' 赋值".to_string())?;

    if ident.trim().is_empty() {
        return Err("缺少变量名".to_string());
    }

    let body = body.trim().trim_end_matches(';').trim_end();
    if body.is_empty() {
        return Err("赋值体为空".to_string());
    }

    Ok(body)
}

/// 读取并解析一个 JS 表文件为原始记录序列
///
/// # 参数
/// - file_path: 表文件路径（.js）
///
/// # 返回
/// - Ok(Vec<T>): 解析后的原始记录
/// - Err(LoadError): 文件缺失 / 格式不符 / 解析失败
pub fn parse_js_table<T: DeserializeOwned>(file_path: &Path) -> LoadResult<Vec<T>> {
    // 检查文件存在
    if !file_path.exists() {
        return Err(LoadError::FileNotFound(file_path.display().to_string()));
    }

    // 检查扩展名
    if let Some(ext) = file_path.extension() {
        if ext != "js" && ext != "json" {
            return Err(LoadError::UnsupportedFormat(
                ext.to_string_lossy().to_string(),
            ));
        }
    }

    let text = fs::read_to_string(file_path)?;

    let body = strip_assignment_wrapper(&text).map_err(|message| LoadError::WrapperParseError {
        path: file_path.display().to_string(),
        message,
    })?;

    serde_json::from_str(body).map_err(|err| LoadError::JsonParseError {
        path: file_path.display().to_string(),
        message: err.to_string(),
    })
}
