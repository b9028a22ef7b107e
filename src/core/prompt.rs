//! Prompt 模板
//!
//! 占位符：`{topic}`（必须）、`{subject}`、`{max_tokens}`。`{topic}` 最后替换，
//! 主题文本里即使出现 `{subject}` 之类也不会被再次展开。

use crate::core::NoteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, NoteError> {
        let template = template.into();
        if !template.contains("{topic}") {
            return Err(NoteError::InvalidTemplate(format!(
                "missing {{topic}} placeholder: {:?}",
                template
            )));
        }
        Ok(Self { template })
    }

    pub fn render(&self, topic: &str, subject: &str, max_tokens: u32) -> String {
        self.template
            .replace("{subject}", subject)
            .replace("{max_tokens}", &max_tokens.to_string())
            .replace("{topic}", topic)
    }
}
