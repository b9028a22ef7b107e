//! 主题队列：纯文本文件，每行一个主题，按 FIFO 消费
//!
//! - 行首行尾空白会被去掉；空行不算主题（peek 跳过，commit 时随其后的主题一并删除）
//! - 文件不存在视为空队列，读取不会创建文件
//! - 删除首个主题时，其余内容逐字节写回（同目录临时文件 + rename，避免写到一半留下残缺队列）

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// 绑定一个队列文件
#[derive(Debug, Clone)]
pub struct TopicQueue {
    path: PathBuf,
}

impl TopicQueue {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取并删除首个主题；队列为空或文件不存在时返回 None
    pub fn pop_front(&self) -> io::Result<Option<String>> {
        let Some(content) = self.read()? else {
            return Ok(None);
        };
        match first_topic(&content) {
            Some((topic, end)) => {
                let topic = topic.to_string();
                self.rewrite(&content[end..])?;
                Ok(Some(topic))
            }
            None => Ok(None),
        }
    }

    /// 读取首个主题，不修改文件
    pub fn peek(&self) -> io::Result<Option<String>> {
        Ok(self
            .read()?
            .and_then(|content| first_topic(&content).map(|(t, _)| t.to_string())))
    }

    /// 首个主题仍是 `topic` 时将其删除，返回是否删除
    ///
    /// 在 peek 与 commit 之间队列被手动改过（首行已不是该主题）时什么都不做。
    pub fn commit(&self, topic: &str) -> io::Result<bool> {
        let Some(content) = self.read()? else {
            return Ok(false);
        };
        match first_topic(&content) {
            Some((first, end)) if first == topic => {
                self.rewrite(&content[end..])?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// 全部待处理主题（按顺序）
    pub fn pending(&self) -> io::Result<Vec<String>> {
        Ok(self
            .read()?
            .map(|content| {
                content
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default())
    }

    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// 软链接按目标文件改写，权限沿用原文件
    fn rewrite(&self, rest: &str) -> io::Result<()> {
        let target = std::fs::canonicalize(&self.path)?;
        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        let permissions = std::fs::metadata(&target)?.permissions();

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(rest.as_bytes())?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// 首个非空行（已 trim）及该行结束处的字节偏移
fn first_topic(content: &str) -> Option<(&str, usize)> {
    let mut end = 0;
    for line in content.split_inclusive('\n') {
        end += line.len();
        let topic = line.trim();
        if !topic.is_empty() {
            return Some((topic, end));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn queue_with(dir: &TempDir, content: &str) -> TopicQueue {
        let path = dir.path().join("topics.md");
        std::fs::write(&path, content).unwrap();
        TopicQueue::new(path)
    }

    #[test]
    fn test_pop_front_removes_first_line() {
        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "A\nB\nC\n");

        assert_eq!(queue.pop_front().unwrap().as_deref(), Some("A"));
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "B\nC\n");
        assert_eq!(queue.pending().unwrap(), vec!["B", "C"]);
    }

    #[test]
    fn test_missing_file_is_empty_queue() {
        let dir = TempDir::new().unwrap();
        let queue = TopicQueue::new(dir.path().join("missing.md"));

        assert_eq!(queue.pop_front().unwrap(), None);
        assert_eq!(queue.peek().unwrap(), None);
        assert!(queue.pending().unwrap().is_empty());
        assert!(!queue.commit("A").unwrap());
        assert!(!queue.path().exists());
    }

    #[test]
    fn test_topic_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "  Hooks \r\nContext");

        assert_eq!(queue.pop_front().unwrap().as_deref(), Some("Hooks"));
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "Context");
        assert_eq!(queue.pop_front().unwrap().as_deref(), Some("Context"));
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "");
        assert_eq!(queue.pop_front().unwrap(), None);
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "\n   \nA\nB\n");

        assert_eq!(queue.peek().unwrap().as_deref(), Some("A"));
        assert!(queue.commit("A").unwrap());
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "B\n");
    }

    #[test]
    fn test_blank_file_is_empty_queue() {
        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "\n\n  \n");

        assert_eq!(queue.pop_front().unwrap(), None);
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "\n\n  \n");
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "A\nB\n");

        assert_eq!(queue.peek().unwrap().as_deref(), Some("A"));
        assert_eq!(queue.peek().unwrap().as_deref(), Some("A"));
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "A\nB\n");
    }

    #[test]
    fn test_commit_only_removes_matching_topic() {
        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "B\nA\n");

        assert!(!queue.commit("A").unwrap());
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "B\nA\n");
        assert!(queue.commit("B").unwrap());
        assert_eq!(std::fs::read_to_string(queue.path()).unwrap(), "A\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_follows_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.md");
        std::fs::write(&real, "A\nB\n").unwrap();
        let link = dir.path().join("queue.md");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        let queue = TopicQueue::new(&link);

        assert_eq!(queue.pop_front().unwrap().as_deref(), Some("A"));
        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&real).unwrap(), "B\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let queue = queue_with(&dir, "A\nB\n");
        std::fs::set_permissions(queue.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        assert!(queue.commit("A").unwrap());
        let mode = std::fs::metadata(queue.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
