//! 笔记流程：取主题 → 计算编号 → 请求 LLM → 写文件 → 出队
//!
//! 主题只在笔记写入成功后才从队列删除：API 失败直接返回错误，写入失败记录日志并以
//! RunOutcome::WriteFailed 结束，两种情况主题都留在队列里等下次。
//! keep_queue 模式（Mock 试跑）写完笔记也不出队。

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{NoteError, NoteProfile};
use crate::llm::LlmClient;
use crate::notes::{next_index, note_path, write_note};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 队列为空或队列文件不存在
    QueueEmpty,
    Written {
        index: u64,
        topic: String,
        path: PathBuf,
        /// 写入文件的 LLM 回复
        content: String,
        /// 主题是否已从队列删除（keep_queue 或写入期间队列被改过时为 false）
        dequeued: bool,
    },
    WriteFailed {
        topic: String,
        path: PathBuf,
        error: String,
    },
}

pub struct NotePipeline {
    llm: Arc<dyn LlmClient>,
    profile: NoteProfile,
    keep_queue: bool,
}

impl NotePipeline {
    pub fn new(llm: Arc<dyn LlmClient>, profile: NoteProfile) -> Self {
        Self {
            llm,
            profile,
            keep_queue: false,
        }
    }

    /// 写完笔记后不删除队列中的主题
    pub fn keep_queue(mut self, keep: bool) -> Self {
        self.keep_queue = keep;
        self
    }

    pub fn profile(&self) -> &NoteProfile {
        &self.profile
    }

    pub async fn run_once(&self) -> Result<RunOutcome, NoteError> {
        let queue = &self.profile.queue;
        let topic = queue.peek().map_err(|source| NoteError::Queue {
            path: queue.path().to_path_buf(),
            source,
        })?;
        let Some(topic) = topic else {
            tracing::info!("Queue {} is empty, nothing to do", queue.path().display());
            return Ok(RunOutcome::QueueEmpty);
        };

        let output_dir = &self.profile.output_dir;
        let index = next_index(output_dir).map_err(|source| NoteError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;
        let path = note_path(output_dir, index, &topic);

        tracing::info!(
            profile = %self.profile.name,
            llm = self.llm.name(),
            index,
            "Requesting note for topic {:?}",
            topic
        );
        let content = self.llm.complete(&self.profile.request_for(&topic)).await?;
        tracing::info!("Completion for {:?}:\n{}", topic, content);

        if let Err(e) = write_note(&path, &content) {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            return Ok(RunOutcome::WriteFailed {
                topic,
                path,
                error: e.to_string(),
            });
        }
        tracing::info!("Note written to {}", path.display());

        let dequeued = if self.keep_queue {
            tracing::info!("Keeping {:?} in queue", topic);
            false
        } else {
            match queue.commit(&topic) {
                Ok(true) => true,
                Ok(false) => {
                    tracing::warn!(
                        "Queue {} changed while generating, {:?} left in place",
                        queue.path().display(),
                        topic
                    );
                    false
                }
                Err(e) => {
                    tracing::error!("Failed to dequeue {:?}: {}", topic, e);
                    false
                }
            }
        };

        Ok(RunOutcome::Written {
            index,
            topic,
            path,
            content,
            dequeued,
        })
    }
}
