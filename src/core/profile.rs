//! Profile：把 [profiles.<name>] 配置解析为可执行的笔记流程参数

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::core::{NoteError, PromptTemplate};
use crate::llm::CompletionRequest;
use crate::notes::TopicQueue;

/// 一条「队列 → 笔记目录」流程
#[derive(Debug, Clone)]
pub struct NoteProfile {
    pub name: String,
    pub queue: TopicQueue,
    pub output_dir: PathBuf,
    pub subject: String,
    pub template: PromptTemplate,
    pub max_tokens: u32,
    /// 覆盖 [llm].model
    pub model: Option<String>,
    pub system_prompt: Option<String>,
}

impl NoteProfile {
    pub fn from_config(cfg: &AppConfig, name: &str) -> Result<Self, NoteError> {
        let section = cfg
            .profile(name)
            .ok_or_else(|| NoteError::UnknownProfile(name.to_string()))?;

        if section.max_tokens == 0 {
            return Err(NoteError::Config(format!(
                "profile {}: max_tokens must be greater than 0",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            queue: TopicQueue::new(&section.queue_file),
            output_dir: section.output_dir,
            subject: section.subject,
            template: PromptTemplate::new(section.prompt_template)?,
            max_tokens: section.max_tokens,
            model: section.model,
            system_prompt: section.system_prompt,
        })
    }

    pub fn render_prompt(&self, topic: &str) -> String {
        self.template.render(topic, &self.subject, self.max_tokens)
    }

    /// 该主题的完整请求：可选 system 消息 + 渲染后的 user prompt
    pub fn request_for(&self, topic: &str) -> CompletionRequest {
        CompletionRequest::with_system(
            self.system_prompt.as_deref(),
            self.render_prompt(topic),
            self.max_tokens,
        )
    }
}
