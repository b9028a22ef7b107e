//! notegen - 个人笔记生成器
//!
//! 从主题队列文件取一个主题，请 LLM 总结并给出代码示例，写成编号 Markdown 笔记。
//!
//! 模块划分：
//! - **cli**: 命令行解析与 run / list 执行
//! - **config**: 应用配置加载（TOML + 环境变量），含多个 profile
//! - **core**: 错误类型、Prompt 模板、Profile、笔记流程（NotePipeline）与组装
//! - **llm**: LLM 客户端抽象与实现（OpenAI 兼容 / DeepSeek / Mock）
//! - **notes**: 主题队列、编号解析、笔记写入
//! - **observability**: 日志初始化

pub mod cli;
pub mod config;
pub mod core;
pub mod llm;
pub mod notes;
pub mod observability;

pub use crate::core::{NoteError, NotePipeline, RunOutcome};
