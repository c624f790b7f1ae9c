// apps/xf_cli/src/commands/query.rs

//! 速度查询命令

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};
use xf_velocity::{MovingInterfaceVelocity, VelocityFactory, VelocityInput};

/// 查询参数
#[derive(Args)]
pub struct QueryArgs {
    /// 输入文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 对象名（默认查询全部对象）
    #[arg(short, long)]
    pub object: Option<String>,

    /// 界面点编号
    #[arg(required = true)]
    pub points: Vec<u32>,
}

/// 执行查询命令
pub fn execute(factory: &VelocityFactory, args: QueryArgs) -> Result<()> {
    let input = VelocityInput::from_file(&args.config)
        .with_context(|| format!("无法加载输入文件 {}", args.config.display()))?;
    let objects = input.build(factory).context("速度对象构建失败")?;

    let selected: Vec<&dyn MovingInterfaceVelocity> = match &args.object {
        Some(name) => {
            let object = objects
                .iter()
                .find(|o| o.name() == name)
                .ok_or_else(|| anyhow!("输入文件中没有名为 '{}' 的对象", name))?;
            vec![object.as_ref()]
        }
        None => objects.iter().map(|o| o.as_ref()).collect(),
    };

    info!(
        "Querying {} point(s) on {} object(s)",
        args.points.len(),
        selected.len()
    );

    for object in selected {
        if !object.enabled()? {
            debug!("Skipping disabled object '{}'", object.name());
            continue;
        }
        println!("[{}] {}", object.name(), object.type_name());
        for &point_id in &args.points {
            let velocity = object.compute_moving_interface_velocity(point_id);
            println!("  point {:>10}: {:e}", point_id, velocity);
        }
    }

    Ok(())
}
