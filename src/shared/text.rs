//! String, path and collection helpers shared by the plugin's commands.

use crate::domain::DomainError;
use regex::{Match, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

/// A QQ account id: digits without leading zeros.
pub const QQ_ID_PATTERN: &str = r"[1-9]\d*";

static QQ_ID_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", QQ_ID_PATTERN)).expect("QQ id pattern is valid"));

pub fn is_qq_id(text: &str) -> bool {
    QQ_ID_EXACT.is_match(text)
}

/// First match of `regex` in `text`.
pub fn find_match<'t>(text: &'t str, regex: &Regex) -> Option<Match<'t>> {
    regex.find(text)
}

pub fn to_path(text: &str) -> PathBuf {
    PathBuf::from(text)
}

pub fn to_absolute_path(text: &str) -> Result<PathBuf, DomainError> {
    std::path::absolute(text).map_err(|e| DomainError::Storage(format!("resolve {}: {}", text, e)))
}

/// Creates `path` and all of its ancestors.
pub fn mkdirs(path: &Path) -> Result<(), DomainError> {
    std::fs::create_dir_all(path)
        .map_err(|e| DomainError::Storage(format!("create dir {}: {}", path.display(), e)))
}

/// Wall-clock time since the Unix epoch, millisecond precision.
pub fn duration_now() -> Duration {
    let millis = chrono::Utc::now().timestamp_millis();
    Duration::from_millis(u64::try_from(millis).unwrap_or(0))
}

/// Indentation as `level` steps of `width` spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub level: usize,
    pub width: usize,
}

impl Indent {
    pub fn new(level: usize, width: usize) -> Self {
        Self { level, width }
    }

    fn spaces(&self) -> usize {
        self.level.saturating_mul(self.width)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self { level: 1, width: 4 }
    }
}

pub fn append_indent<'a>(buf: &'a mut String, content: &str, indent: Indent) -> &'a mut String {
    buf.extend(std::iter::repeat_n(' ', indent.spaces()));
    buf.push_str(content);
    buf
}

pub fn append_line_indent<'a>(
    buf: &'a mut String,
    content: &str,
    indent: Indent,
) -> &'a mut String {
    append_indent(buf, content, indent).push('\n');
    buf
}

pub fn indent_string(content: &str, indent: Indent) -> String {
    let mut buf = String::with_capacity(content.len() + indent.spaces());
    append_indent(&mut buf, content, indent);
    buf
}

/// Runs `block` against an empty vector and returns the filled result.
pub fn build_list<T>(block: impl FnOnce(&mut Vec<T>)) -> Vec<T> {
    let mut list = Vec::new();
    block(&mut list);
    list
}

pub fn single_list<T>(value: T) -> Vec<T> {
    vec![value]
}

/// First two elements, or `None` when there are fewer than two.
pub fn truncate_pair<T: Clone>(items: &[T]) -> Option<(T, T)> {
    match items {
        [a, b, ..] => Some((a.clone(), b.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qq_id() {
        assert!(is_qq_id("10001"));
        assert!(!is_qq_id("0123"));
        assert!(!is_qq_id("0"));
        assert!(!is_qq_id("12a"));
        assert!(!is_qq_id(""));
    }

    #[test]
    fn test_find_match_returns_first() {
        let re = Regex::new(QQ_ID_PATTERN).unwrap();
        let m = find_match("ban 0 then 2333 and 42", &re).unwrap();
        assert_eq!(m.as_str(), "2333");
        assert!(find_match("no ids", &re).is_none());
    }

    #[test]
    fn test_indent_helpers() {
        assert_eq!(indent_string("x", Indent::default()), "    x");
        assert_eq!(indent_string("x", Indent::new(2, 2)), "    x");
        assert_eq!(indent_string("x", Indent::new(0, 4)), "x");

        let mut buf = String::new();
        append_line_indent(&mut buf, "a", Indent::default());
        append_indent(&mut buf, "b", Indent::new(2, 1));
        assert_eq!(buf, "    a\n  b");
    }

    #[test]
    fn test_collection_helpers() {
        let list = build_list(|l| {
            l.push(1);
            l.push(2);
            l.push(3);
        });
        assert_eq!(list, vec![1, 2, 3]);
        assert_eq!(truncate_pair(&list), Some((1, 2)));
        assert_eq!(truncate_pair(&[1]), None);
        assert_eq!(single_list("a"), vec!["a"]);
    }

    #[test]
    fn test_paths() {
        assert!(to_absolute_path("rel/file.txt").unwrap().is_absolute());
        assert_eq!(to_path("a/b"), PathBuf::from("a/b"));

        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x/y/z");
        mkdirs(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_duration_now_is_after_2020() {
        assert!(duration_now() > Duration::from_secs(1_577_836_800));
    }
}
