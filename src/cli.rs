//! 命令行：run（默认）/ list 子命令
//!
//! 命令输出写入传入的 writer（main 传 stdout），日志走 tracing。

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::{load_config, DEFAULT_PROFILE};
use crate::core::{build_pipeline, NoteProfile, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "notegen", version, about = "Generate numbered markdown notes from a topic queue")]
pub struct Cli {
    /// 额外的 TOML 配置文件
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 使用哪个 [profiles.<name>]
    #[arg(long, global = true, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// 使用 Mock LLM，不调用真实 API；回显笔记仍写入输出目录，主题保留在队列中
    #[arg(long, global = true)]
    pub mock: bool,

    /// 输出 debug 日志（RUST_LOG 优先），run 时同时打印 LLM 回复
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 处理队列中的下一个主题（默认）
    Run,
    /// 列出待处理主题
    List,
}

/// 执行一条命令，结果写入 `out`
pub async fn execute(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let cfg = load_config(cli.config.clone()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let pipeline = build_pipeline(&cfg, &cli.profile, cli.mock)
                .context("Failed to set up note pipeline")?;
            match pipeline.run_once().await.context("Note generation failed")? {
                RunOutcome::QueueEmpty => {}
                RunOutcome::Written { path, content, .. } => {
                    if cli.verbose {
                        writeln!(out, "{}", content)?;
                    }
                    writeln!(out, "{}", path.display())?;
                }
                // 已记录日志，不视为失败
                RunOutcome::WriteFailed { .. } => {}
            }
        }
        Command::List => {
            let profile = NoteProfile::from_config(&cfg, &cli.profile)?;
            let topics = profile.queue.pending().with_context(|| {
                format!("Failed to read queue {}", profile.queue.path().display())
            })?;
            for topic in topics {
                writeln!(out, "{}", topic)?;
            }
        }
    }

    Ok(())
}
