//! 组装：根据配置选择 LLM 后端，并与 profile 组成 NotePipeline

use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::{NoteError, NotePipeline, NoteProfile};
use crate::llm::{create_deepseek_client, LlmClient, MockLlmClient, OpenAiClient, DEEPSEEK_CHAT};

/// 根据配置选择 LLM 后端（OpenAI 兼容 / DeepSeek / Mock）
///
/// `model_override` 来自 profile，优先于 [llm].model。
pub fn create_llm_from_config(
    cfg: &AppConfig,
    model_override: Option<&str>,
) -> Result<Arc<dyn LlmClient>, NoteError> {
    let model = model_override.unwrap_or(cfg.llm.model.as_str());

    match cfg.llm.provider.to_lowercase().as_str() {
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| NoteError::MissingApiKey("OPENAI_API_KEY".to_string()))?;
            tracing::info!("Using OpenAI LLM ({})", model);
            Ok(Arc::new(OpenAiClient::new(
                cfg.llm.base_url.as_deref(),
                model,
                &api_key,
            )))
        }
        "deepseek" => {
            let model = if model.starts_with("deepseek") {
                model
            } else {
                tracing::warn!("Model {} is not a DeepSeek model, using {}", model, DEEPSEEK_CHAT);
                DEEPSEEK_CHAT
            };
            tracing::info!("Using DeepSeek LLM ({})", model);
            Ok(Arc::new(create_deepseek_client(Some(model))?))
        }
        "mock" => {
            tracing::warn!("Using Mock LLM, notes will echo the prompt");
            Ok(Arc::new(MockLlmClient::new()))
        }
        other => Err(NoteError::Config(format!("unknown llm provider: {}", other))),
    }
}

/// 解析 profile 并创建对应 LLM；`force_mock` 时忽略 [llm].provider
///
/// Mock 后端（`--mock` 或 provider = "mock"）照常写笔记，但不从队列删除主题。
pub fn build_pipeline(
    cfg: &AppConfig,
    profile_name: &str,
    force_mock: bool,
) -> Result<NotePipeline, NoteError> {
    let profile = NoteProfile::from_config(cfg, profile_name)?;
    let is_mock = force_mock || cfg.llm.provider.eq_ignore_ascii_case("mock");
    let llm: Arc<dyn LlmClient> = if force_mock {
        Arc::new(MockLlmClient::new())
    } else {
        create_llm_from_config(cfg, profile.model.as_deref())?
    };
    Ok(NotePipeline::new(llm, profile).keep_queue(is_mock))
}
