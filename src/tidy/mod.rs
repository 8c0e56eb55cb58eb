//! Tidy - TeX 风格文本清理
//!
//! 一组互相独立、可任意组合的纯函数，每个函数处理一类模式：
//! 1. 行级空白（行首编号、行首/行尾空白、空行）
//! 2. 花括号（空括号、`{` 之后与 `}` 之前的空白）
//! 3. 宏（空宏、宏体内空行）
//! 4. 按词/按模式删除、列表去重
//!
//! 调用方自行决定调用哪些函数以及顺序。

mod braces;
mod delete;
mod engine;
mod macros;
mod matcher;
mod rules;
mod whitespace;

pub use braces::{
    collapse_empty_brackets, tighten_after_opening_brace, tighten_before_closing_brace,
};
pub use delete::{deduplicate, delete_by_pattern, delete_word};
pub use engine::TidyEngine;
pub use macros::{
    collapse_all_empty_macros, collapse_empty_macros, remove_empty_lines_in_macros,
};
pub use matcher::{Pattern, TextMatcher};
pub use whitespace::{
    remove_empty_lines, strip_leading_spaces, strip_numbering, strip_trailing_spaces,
};
