//! Mock LLM 客户端（用于测试与离线试跑，无需 API）
//!
//! 默认把最后一条 User 消息回显为 Markdown；可用 with_response / failing 固定返回值。
//! 收到的请求都会记录下来，供测试断言。

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{CompletionRequest, LlmClient, LlmError};

#[derive(Debug, Default)]
pub struct MockLlmClient {
    response: Option<Result<String, String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次都返回固定文本
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response: Some(Ok(text.into())),
            ..Self::default()
        }
    }

    /// 每次都返回 LlmError::Api
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Some(Err(message.into())),
            ..Self::default()
        }
    }

    /// 已收到的请求（按调用顺序）
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        if let Ok(mut r) = self.requests.lock() {
            r.push(request.clone());
        }

        match &self.response {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(msg)) => Err(LlmError::Api(msg.clone())),
            None => {
                let prompt = request.last_user_content().unwrap_or("(no input)");
                Ok(format!("# Mock note\n\n> {}\n", prompt))
            }
        }
    }
}
