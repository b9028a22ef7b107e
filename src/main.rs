//! notegen 入口：加载 .env、初始化日志，交给 cli::execute。

use clap::Parser;
use notegen::cli::{execute, Cli};
use notegen::observability;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    observability::init(if cli.verbose { "debug" } else { "info" });

    execute(cli, &mut std::io::stdout().lock()).await
}
