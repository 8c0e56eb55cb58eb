//! 按词、按模式删除，以及列表去重

use std::collections::HashSet;

use crate::error::Result;
use crate::tidy::matcher::{Pattern, TextMatcher};

/// 删除整词出现的 `word`
///
/// `word` 按匹配模式解释，两侧要求单词边界
pub fn delete_word(text: &str, word: &str) -> Result<String> {
    let pattern = Pattern::word(word)?;
    Ok(pattern.delete_all(text).into_owned())
}

/// 删除 `pattern` 的所有匹配
pub fn delete_by_pattern(text: &str, pattern: &str) -> Result<String> {
    let pattern = Pattern::compile(pattern)?;
    Ok(pattern.delete_all(text).into_owned())
}

/// 列表去重，保留每个值第一次出现的位置
pub fn deduplicate<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut encountered: HashSet<&str> = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| encountered.insert(*item))
        .map(str::to_string)
        .collect()
}
