// ==========================================
// 情景查看器配置核心 - 配置检查入口
// ==========================================
// 职责: 装载命令行给定的数据集目录并整体校验，
//       逐条打印全部违规后以非零码退出
// ==========================================
// 用法: scenario-cfg-check <数据集目录|数据根目录>...
// 数据根目录会展开为其下全部变体目录（如 VERPAT / VERSPM）
// ==========================================

use anyhow::bail;
use scenario_viewer_config::logging;
use scenario_viewer_config::source::{list_datasets, load_dataset, LoadError, SCENARIO_FILE};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", scenario_viewer_config::APP_NAME);
    tracing::info!("系统版本: {}", scenario_viewer_config::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("用法: scenario-cfg-check <数据集目录|数据根目录>...");
    }

    // 展开参数: 数据集目录原样保留，数据根目录展开为其变体目录
    let mut dataset_dirs: Vec<PathBuf> = Vec::new();
    for arg in &args {
        let path = PathBuf::from(arg);
        if path.join(SCENARIO_FILE).exists() {
            dataset_dirs.push(path);
        } else {
            dataset_dirs.extend(list_datasets(&path)?);
        }
    }

    if dataset_dirs.is_empty() {
        bail!("给定路径下未找到任何数据集目录");
    }

    let mut failed = 0usize;
    for dir in &dataset_dirs {
        match load_dataset(dir) {
            Ok(model) => {
                tracing::info!(
                    dataset = %model.dataset(),
                    factors = model.factors().len(),
                    categories = model.categories().count(),
                    outputs = model.output_metrics().count(),
                    "校验通过"
                );
            }
            Err(LoadError::SchemaViolations { dataset, errors }) => {
                failed += 1;
                tracing::error!(dataset = %dataset, violations = errors.len(), "校验未通过");
                // 逐条原样打印，违规携带的标识符是回源修正的唯一线索
                for error in &errors {
                    eprintln!("[{}] {}", dataset, error);
                }
            }
            Err(err) => {
                failed += 1;
                tracing::error!(dir = %dir.display(), error = %err, "装载失败");
                eprintln!("[{}] {}", dir.display(), err);
            }
        }
    }

    if failed > 0 {
        bail!("{} 个数据集配置不可用", failed);
    }

    Ok(())
}
