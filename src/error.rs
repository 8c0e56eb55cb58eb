//! 错误类型定义

use thiserror::Error;

/// 文本清理错误
///
/// 只有接受调用方模式的操作会失败，其余变换对任何输入都是全函数
#[derive(Error, Debug)]
pub enum StrDelError {
    /// 调用方提供的匹配模式语法无效
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl StrDelError {
    /// 返回出错的模式原文
    pub fn pattern(&self) -> &str {
        match self {
            StrDelError::InvalidPattern { pattern, .. } => pattern,
        }
    }
}

pub type Result<T> = std::result::Result<T, StrDelError>;
