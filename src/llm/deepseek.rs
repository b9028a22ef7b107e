//! DeepSeek API 客户端（OpenAI 兼容格式）
//!
//! - Base URL: https://api.deepseek.com
//! - 模型: deepseek-chat（默认）；deepseek-* 均可通过配置指定

use crate::core::NoteError;
use crate::llm::OpenAiClient;

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEEPSEEK_CHAT: &str = "deepseek-chat";

/// 创建 DeepSeek 客户端
///
/// - Key：`DEEPSEEK_API_KEY`，未设置时退回 `OPENAI_API_KEY`，都没有则报错
/// - 模型：`model` 参数，未指定时为 deepseek-chat
pub fn create_deepseek_client(model: Option<&str>) -> Result<OpenAiClient, NoteError> {
    let api_key = std::env::var("DEEPSEEK_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .map_err(|_| NoteError::MissingApiKey("DEEPSEEK_API_KEY".to_string()))?;

    let model = model.unwrap_or(DEEPSEEK_CHAT);

    Ok(OpenAiClient::new(Some(DEEPSEEK_BASE_URL), model, &api_key))
}
