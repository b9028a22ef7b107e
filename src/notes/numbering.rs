//! 笔记编号：输出目录中的 `{N}. {主题}.md`
//!
//! 取文件名（去掉 .md）第一个 `.` 之前的部分解析为整数，取最大值；解析失败的文件忽略。
//! 目录为空时没有编号（None），下一篇从 FIRST_INDEX 开始，不对「不存在」做算术。

use std::io;
use std::path::{Path, PathBuf};

/// 目录中没有编号笔记时，第一篇的编号
pub const FIRST_INDEX: u64 = 1;

/// 从文件名解析编号：`7. Context.md` → 7，`notes.md` → None
pub fn parse_index(file_name: &str) -> Option<u64> {
    let stem = file_name.strip_suffix(".md")?;
    stem.split('.').next()?.trim().parse().ok()
}

/// 输出目录中最大的编号；目录不存在或没有可解析的文件时返回 None
pub fn highest_index(dir: &Path) -> io::Result<Option<u64>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut highest = None;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(n) = parse_index(name) {
            highest = highest.max(Some(n));
        }
    }
    Ok(highest)
}

/// 下一篇笔记的编号：最大编号 + 1，没有时为 FIRST_INDEX
pub fn next_index(dir: &Path) -> io::Result<u64> {
    Ok(highest_index(dir)?.map_or(FIRST_INDEX, |n| n.saturating_add(1)))
}

/// 文件名中主题部分的最大字节数；加上 `{index}. ` 与 `.md` 仍低于常见文件系统 255 字节上限
pub const MAX_TOPIC_BYTES: usize = 200;

/// `{dir}/{index}. {topic}.md`；主题中的路径分隔符等非法字符替换为 `-`，
/// 超过 MAX_TOPIC_BYTES 时按字符边界截断
pub fn note_path(dir: &Path, index: u64, topic: &str) -> PathBuf {
    dir.join(format!("{}. {}.md", index, sanitize_topic(topic)))
}

fn sanitize_topic(topic: &str) -> String {
    let mut name = String::with_capacity(topic.len().min(MAX_TOPIC_BYTES));
    for c in topic.chars().map(sanitize_char) {
        if name.len() + c.len_utf8() > MAX_TOPIC_BYTES {
            break;
        }
        name.push(c);
    }
    name.trim_end().to_string()
}

fn sanitize_char(c: char) -> char {
    match c {
        '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
        c if c.is_control() => '-',
        c => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3. Hooks.md"), Some(3));
        assert_eq!(parse_index("12.md"), Some(12));
        assert_eq!(parse_index("0. useEffect vs. useLayoutEffect.md"), Some(0));
        assert_eq!(parse_index("notes.md"), None);
        assert_eq!(parse_index("-1. Negative.md"), None);
        assert_eq!(parse_index("9. Draft.txt"), None);
    }

    #[test]
    fn test_highest_index_skips_unnumbered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "3. Hooks.md");
        touch(dir.path(), "7. Context.md");
        touch(dir.path(), "notes.md");
        touch(dir.path(), "42. Not markdown.txt");

        assert_eq!(highest_index(dir.path()).unwrap(), Some(7));
        assert_eq!(next_index(dir.path()).unwrap(), 8);
    }

    #[test]
    fn test_empty_dir_has_no_index() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "README.md");

        assert_eq!(highest_index(dir.path()).unwrap(), None);
        assert_eq!(next_index(dir.path()).unwrap(), FIRST_INDEX);
        let path = note_path(dir.path(), next_index(dir.path()).unwrap(), "Topic");
        assert_eq!(path.file_name().unwrap(), "1. Topic.md");
    }

    #[test]
    fn test_missing_dir_has_no_index() {
        let dir = TempDir::new().unwrap();
        assert_eq!(highest_index(&dir.path().join("topics")).unwrap(), None);
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("99. Archive.md")).unwrap();
        touch(dir.path(), "2. Refs.md");

        assert_eq!(highest_index(dir.path()).unwrap(), Some(2));
    }

    #[test]
    fn test_note_path_stays_in_dir() {
        let dir = Path::new("topics");
        assert_eq!(
            note_path(dir, 5, "Suspense"),
            PathBuf::from("topics/5. Suspense.md")
        );
        let path = note_path(dir, 6, "../etc/passwd");
        assert_eq!(path.parent(), Some(dir));
        assert_eq!(path.file_name().unwrap(), "6. ..-etc-passwd.md");
    }

    #[test]
    fn test_long_topic_is_truncated() {
        let dir = Path::new("topics");
        let path = note_path(dir, 12, &"x".repeat(300));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.len() <= 255);
        assert_eq!(name, format!("12. {}.md", "x".repeat(MAX_TOPIC_BYTES)));
        assert_eq!(parse_index(name), Some(12));

        // 多字节字符不会被截成半个
        let path = note_path(dir, 1, &"闭包".repeat(100));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.len() <= 255);
        assert!(name.ends_with("包.md"));
    }
}
