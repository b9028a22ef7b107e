//! 笔记文件层：主题队列、编号解析、Markdown 写入

pub mod numbering;
pub mod queue;
pub mod writer;

pub use numbering::{highest_index, next_index, note_path, parse_index, FIRST_INDEX};
pub use queue::TopicQueue;
pub use writer::write_note;
