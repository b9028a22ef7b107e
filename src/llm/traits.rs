//! LLM 客户端抽象
//!
//! 所有后端（OpenAI 兼容 / DeepSeek / Mock）实现 LlmClient::complete：一次请求，取首条回复文本。
//! 不做流式、不做重试。

use async_trait::async_trait;
use thiserror::Error;

use crate::llm::CompletionRequest;

/// LLM 调用失败
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 返回中没有 choice，或首个 choice 没有文本内容
    #[error("Empty response: no completion text in first choice")]
    EmptyResponse,
}

/// LLM 客户端 trait：非流式完成
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 发送请求并返回首个 choice 的文本
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    /// 后端名称（日志用）
    fn name(&self) -> &str {
        "llm"
    }
}
