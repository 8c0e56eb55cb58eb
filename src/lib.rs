//! strdel - TeX 风格文本的空白与空标记清理
//!
//! 所有变换都是无状态纯函数，见 [`tidy`]。

mod config;
mod error;
mod logging;
pub mod tidy;

pub use config::TidyConfig;
pub use error::{Result, StrDelError};
pub use logging::init_logging;
pub use tidy::{
    collapse_all_empty_macros, collapse_empty_brackets, collapse_empty_macros, deduplicate,
    delete_by_pattern, delete_word, remove_empty_lines, remove_empty_lines_in_macros,
    strip_leading_spaces, strip_numbering, strip_trailing_spaces, tighten_after_opening_brace,
    tighten_before_closing_brace, Pattern, TextMatcher, TidyEngine,
};
