//! 可复用的清理引擎
//!
//! 预编译调用方的删除词和删除模式，绑定默认宏嵌套深度

use crate::config::TidyConfig;
use crate::error::Result;
use crate::tidy::macros::collapse_empty_macros;
use crate::tidy::matcher::{Pattern, TextMatcher};

/// 清理引擎（可复用，预编译规则）
#[derive(Debug, Clone)]
pub struct TidyEngine {
    /// 整词删除规则
    words: Vec<Pattern>,
    /// 任意模式删除规则
    patterns: Vec<Pattern>,
    /// 空宏删除的轮数
    macro_nesting_depth: usize,
}

impl TidyEngine {
    /// 创建清理引擎
    ///
    /// 任一词或模式无法编译时返回 `InvalidPattern`
    pub fn new<W, P>(words: &[W], patterns: &[P], macro_nesting_depth: usize) -> Result<Self>
    where
        W: AsRef<str>,
        P: AsRef<str>,
    {
        let words = words
            .iter()
            .map(|w| Pattern::word(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let patterns = patterns
            .iter()
            .map(|p| Pattern::compile(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "TidyEngine ready: {} words, {} patterns, macro depth {}",
            words.len(),
            patterns.len(),
            macro_nesting_depth
        );

        Ok(Self {
            words,
            patterns,
            macro_nesting_depth,
        })
    }

    /// 从配置创建
    pub fn from_config(config: &TidyConfig) -> Result<Self> {
        Self::new(&config.words, &config.patterns, config.macro_nesting_depth)
    }

    /// 按配置顺序删除所有词，再删除所有模式
    pub fn delete_configured(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in self.words.iter().chain(&self.patterns) {
            if pattern.is_match(&result) {
                result = pattern.delete_all(&result).into_owned();
            }
        }
        result
    }

    /// 以绑定的深度删除空宏
    pub fn collapse_empty_macros(&self, text: &str) -> String {
        collapse_empty_macros(text, self.macro_nesting_depth)
    }

    pub fn macro_nesting_depth(&self) -> usize {
        self.macro_nesting_depth
    }
}

impl Default for TidyEngine {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            patterns: Vec::new(),
            macro_nesting_depth: TidyConfig::default().macro_nesting_depth,
        }
    }
}
