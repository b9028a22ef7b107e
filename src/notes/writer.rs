//! 笔记写入：原样写入 LLM 返回的文本（不加 frontmatter、不转义），已存在则覆盖

use std::io;
use std::path::Path;

/// 写入笔记；父目录不存在时自动创建
pub fn write_note(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
