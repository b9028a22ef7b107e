//! 核心流程层：错误、Prompt 模板、Profile、笔记流程与组装

pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod profile;
pub mod prompt;

pub use error::NoteError;
pub use orchestrator::{build_pipeline, create_llm_from_config};
pub use pipeline::{NotePipeline, RunOutcome};
pub use profile::NoteProfile;
pub use prompt::PromptTemplate;
