//! 固定清理规则
//!
//! 每条规则在进程内只编译一次
//!
//! `\s`、`\S`、`\b` 均按 Unicode 规则匹配，例如 `\u{a0}` 视为空白

use regex::Regex;

use crate::tidy::matcher::Pattern;

fn rule(pattern: &str) -> Pattern {
    Pattern::from(Regex::new(pattern).expect("valid regex literal"))
}

lazy_static::lazy_static! {
    /// 行首编号，如 `3. Heading`
    pub static ref NUMBERING: Pattern = rule(r"(?m)^[ \t\r\f]*[0-9]+\.[ \t\r\f]*");

    /// 换行前的水平空白
    pub static ref TRAILING_SPACES: Pattern = rule(r"[ \t\r\f]+\n");

    /// 文本开头的水平空白
    pub static ref LEADING_SPACES_AT_START: Pattern = rule(r"^[ \t\r\f]+");

    /// 换行后的水平空白
    pub static ref LEADING_SPACES_AFTER_BREAK: Pattern = rule(r"\n[ \t\r\f]+");

    /// 只含空白的花括号 `{ \n }`
    pub static ref WHITESPACE_BRACKETS: Pattern = rule(r"\{\s+\}");

    /// 只含换行标记的花括号 `{\\}`
    pub static ref LINEBREAK_BRACKETS: Pattern = rule(r"\{\\\\\}");

    /// 只含空白的行（连同其后的换行符）
    pub static ref EMPTY_LINE: Pattern = rule(r"(?m)^\s*$[\r\n]*");

    /// 空宏 `\name{}`，可带换行标记 `\\`
    pub static ref EMPTY_MACRO: Pattern = rule(r"\\[a-z]+\{\}(?:\s*\\\\)?");

    /// 宏体内的第一处空行
    ///
    /// 1: 宏名到空行前的内容（惰性，跨行）
    /// 2: 空行后一行的缩进
    /// 3: 该行起到第一个 `}` 的内容（惰性，跨行）
    pub static ref EMPTY_LINE_IN_MACRO: Pattern =
        rule(r"(\\[a-z]+\{(?s:.*?))\r?\n[ \t\f]*\r?\n([ \t\f]*)((?s:.*?)\})");

    /// 紧贴 `}` 的连续换行标记
    pub static ref LINEBREAKS_BEFORE_CLOSING: Pattern = rule(r"(?:\\\\)+\}");

    /// `}` 前的空白
    pub static ref SPACES_BEFORE_CLOSING: Pattern = rule(r"\s+\}");

    /// `}` 前空白与换行标记的混合序列，分组 1 为最后一个单元
    pub static ref MIXED_BEFORE_CLOSING: Pattern = rule(r"(\s|\\\\)+\}");

    /// 非空白字符后的 `{` 及其后的空白
    pub static ref SPACES_AFTER_OPENING: Pattern = rule(r"(\S)\{\s+");
}
