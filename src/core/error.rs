//! 错误类型
//!
//! 可恢复的情况（队列文件不存在、编号无法解析、笔记写入失败）不走这里，由调用方吸收；
//! 这里只放会终止本次运行的错误。

use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing API key: set {0} (environment or .env)")]
    MissingApiKey(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid prompt template: {0}")]
    InvalidTemplate(String),

    #[error("Queue file {path}: {source}")]
    Queue {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output dir {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Llm(#[from] LlmError),
}
