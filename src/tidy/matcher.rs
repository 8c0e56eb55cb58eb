//! 匹配接口
//!
//! 把底层正则引擎藏在一个小 trait 后面，规则只依赖 `TextMatcher`

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::{Result, StrDelError};

/// 文本匹配器
pub trait TextMatcher {
    /// 文本中是否存在匹配
    fn is_match(&self, text: &str) -> bool;

    /// 替换所有不重叠的匹配（从左到右扫描）
    ///
    /// `replacement` 支持 `$1` / `${name}` 形式的分组引用
    fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str>;

    /// 删除所有匹配
    fn delete_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.replace_all(text, "")
    }
}

/// 基于 `regex` 的匹配模式
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// 编译模式
    ///
    /// 语法错误时返回 `InvalidPattern`
    pub fn compile(pattern: &str) -> Result<Self> {
        match Regex::new(pattern) {
            Ok(regex) => {
                tracing::debug!("Compiled pattern: {}", pattern);
                Ok(Self { regex })
            }
            Err(source) => {
                tracing::debug!("Rejected pattern {:?}: {}", pattern, source);
                Err(StrDelError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            }
        }
    }

    /// 编译整词模式（两侧加单词边界）
    ///
    /// `word` 本身按模式解释，不做转义；先单独校验，再整体分组，
    /// 使边界作用于整个片段（如 `a|b`）
    pub fn word(word: &str) -> Result<Self> {
        Self::compile(word)?;
        let bounded = format!(r"\b(?:{})\b", word);
        Self::compile(&bounded).map_err(|err| match err {
            StrDelError::InvalidPattern { source, .. } => StrDelError::InvalidPattern {
                pattern: word.to_string(),
                source,
            },
        })
    }

    /// 模式原文
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// 用闭包计算每处匹配的替换文本
    pub fn replace_all_with<'t, F>(&self, text: &'t str, replacer: F) -> Cow<'t, str>
    where
        F: FnMut(&Captures) -> String,
    {
        self.regex.replace_all(text, replacer)
    }

    /// 同 `replace_all_with`，闭包额外拿到匹配之后的剩余文本
    pub fn replace_all_with_following<F>(&self, text: &str, mut replacer: F) -> String
    where
        F: FnMut(&Captures, &str) -> String,
    {
        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;
        for caps in self.regex.captures_iter(text) {
            let Some(m) = caps.get(0) else {
                continue;
            };
            result.push_str(&text[last_end..m.start()]);
            result.push_str(&replacer(&caps, &text[m.end()..]));
            last_end = m.end();
        }
        result.push_str(&text[last_end..]);
        result
    }

    /// 不重叠匹配的数量
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl TextMatcher for Pattern {
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        self.regex.replace_all(text, replacement)
    }
}
