//! 请求消息
//!
//! 与 Chat Completions API 的 role/content 一一对应；笔记生成发送一条 user 消息，
//! profile 配置了 system_prompt 时在前面加一条 system 消息。

use serde::{Deserialize, Serialize};

/// 消息角色（与 LLM API 一致）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    System,
}

/// 单条消息
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// 一次完成请求：消息列表 + 输出 token 上限
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, max_tokens: u32) -> Self {
        Self {
            messages,
            max_tokens,
        }
    }

    /// 单条 user 消息的请求
    pub fn user_prompt(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self::new(vec![Message::user(prompt)], max_tokens)
    }

    /// 可选 system 消息 + user 消息
    pub fn with_system(system: Option<&str>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(prompt));
        Self::new(messages, max_tokens)
    }

    /// 最后一条 User 消息内容
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}
