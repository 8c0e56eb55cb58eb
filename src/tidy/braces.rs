//! 花括号周围的空白整理

use crate::tidy::matcher::TextMatcher;
use crate::tidy::rules::{
    LINEBREAKS_BEFORE_CLOSING, LINEBREAK_BRACKETS, MIXED_BEFORE_CLOSING, SPACES_AFTER_OPENING,
    SPACES_BEFORE_CLOSING, WHITESPACE_BRACKETS,
};

/// 把只含空白或只含 `\\` 的花括号折叠为 `{}`
///
/// 例：`\emph{ \n\n }` → `\emph{}`
pub fn collapse_empty_brackets(text: &str) -> String {
    let text = WHITESPACE_BRACKETS.replace_all(text, "{}");
    LINEBREAK_BRACKETS.replace_all(&text, "{}").into_owned()
}

/// 清理 `}` 前的空白和换行标记
///
/// 依次执行三步：
/// 1. `\\}` → `}\\`（连续多个标记只保留一个）
/// 2. 空白 + `}` → `} `
/// 3. 空白与 `\\` 混合 + `}` → `} ` + 最后一个单元
pub fn tighten_before_closing_brace(text: &str) -> String {
    let text = LINEBREAKS_BEFORE_CLOSING.replace_all(text, r"}\\");
    let text = SPACES_BEFORE_CLOSING.replace_all(&text, "} ");
    MIXED_BEFORE_CLOSING
        .replace_all(&text, "} ${1}")
        .into_owned()
}

/// 删除 `{` 之后的空白（`{` 前须为非空白字符）
///
/// 例：`\emph{\n\n  Test}` → `\emph{Test}`
pub fn tighten_after_opening_brace(text: &str) -> String {
    SPACES_AFTER_OPENING.replace_all(text, "${1}{").into_owned()
}
