// apps/xf_cli/src/main.rs

//! XFEM 界面速度命令行工具
//!
//! 列出已注册的速度对象类型、校验输入文件、按界面点查询速度。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// XFEM 运动界面速度对象命令行工具
#[derive(Parser)]
#[command(name = "xf_cli")]
#[command(author = "MariHydro Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "XFEM moving interface velocity objects", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出已注册的速度对象类型
    List(commands::list::ListArgs),
    /// 校验输入文件
    Validate(commands::validate::ValidateArgs),
    /// 查询界面点速度
    Query(commands::query::QueryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 启动时显式注册全部内置对象
    let factory = xf_velocity::VelocityFactory::with_builtins()?;

    // 执行命令
    match cli.command {
        Commands::List(args) => commands::list::execute(&factory, args),
        Commands::Validate(args) => commands::validate::execute(&factory, args),
        Commands::Query(args) => commands::query::execute(&factory, args),
    }
}
