// apps/xf_cli/src/commands/validate.rs

//! 输入文件校验命令

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};
use xf_velocity::{VelocityFactory, VelocityInput};

/// 校验参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 输入文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 严格模式（没有任何速度对象也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 执行校验命令
pub fn execute(factory: &VelocityFactory, args: ValidateArgs) -> Result<()> {
    info!("Validating {}", args.config.display());

    let input = VelocityInput::from_file(&args.config)
        .with_context(|| format!("无法加载输入文件 {}", args.config.display()))?;

    if input.is_empty() {
        if args.strict {
            bail!("输入文件中没有 UserObjects 块");
        }
        warn!("No UserObjects found in {}", args.config.display());
    }

    let objects = input.build(factory).context("速度对象构建失败")?;

    for object in &objects {
        let mesh = if object.use_displaced_mesh()? { "displaced" } else { "undisplaced" };
        println!("  ✓ {} ({}, {} mesh)", object.name(), object.type_name(), mesh);
    }
    info!("{} velocity object(s) valid", objects.len());

    Ok(())
}
