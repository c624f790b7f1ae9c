// apps/xf_cli/src/commands/list.rs

//! 类型列表命令

use anyhow::Result;
use clap::Args;
use tracing::info;
use xf_params::InputParameters;
use xf_velocity::VelocityFactory;

/// 列表参数
#[derive(Args)]
pub struct ListArgs {
    /// 同时显示每个类型的参数
    #[arg(long)]
    pub params: bool,
}

/// 执行列表命令
pub fn execute(factory: &VelocityFactory, args: ListArgs) -> Result<()> {
    info!("{} velocity type(s) registered", factory.len());

    for type_name in factory.registered_types() {
        let params = factory.valid_params(type_name)?;
        println!("{}", type_name);
        println!("  {}", params.class_description());
        if args.params {
            print_params(&params);
        }
    }

    Ok(())
}

fn print_params(params: &InputParameters) {
    for spec in params.specs() {
        let default = match (&spec.default, spec.required) {
            (_, true) => "(required)".to_string(),
            (Some(v), false) => format!("= {}", v),
            (None, false) => String::new(),
        };
        println!("    {:<20} {:<7} {:<12} {}", spec.name, spec.kind, default, spec.doc);
    }
}
