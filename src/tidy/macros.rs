//! 空宏与宏体空行处理

use crate::tidy::matcher::TextMatcher;
use crate::tidy::rules::{EMPTY_LINE_IN_MACRO, EMPTY_MACRO};

/// 删除空宏 `\name{}`（及其后的 `\\`），最多执行 `depth` 轮
///
/// 每轮是一次从左到右的不重叠扫描。内层空宏删除后外层才会变空，
/// 因此 `depth` 至少要等于最大嵌套层数。某一轮没有改动时提前结束，
/// 结果与跑满 `depth` 轮相同。
pub fn collapse_empty_macros(text: &str, depth: usize) -> String {
    let mut result = text.to_string();
    for pass in 0..depth {
        let next = EMPTY_MACRO.delete_all(&result).into_owned();
        if next == result {
            tracing::trace!("Empty macro collapse settled after {} passes", pass);
            break;
        }
        result = next;
    }
    result
}

/// 反复删除空宏直到文本不再变化
pub fn collapse_all_empty_macros(text: &str) -> String {
    let mut result = text.to_string();
    let mut passes = 0usize;
    while EMPTY_MACRO.is_match(&result) {
        result = EMPTY_MACRO.delete_all(&result).into_owned();
        passes += 1;
    }
    tracing::trace!("Empty macro collapse reached fixpoint after {} passes", passes);
    result
}

/// 删除宏体内的空行
///
/// 每处宏调用只处理第一处空行：空行被删除，上一行末尾补一个空格，
/// 下一行保留自身缩进。同一宏体内的后续空行不处理。
pub fn remove_empty_lines_in_macros(text: &str) -> String {
    let count = EMPTY_LINE_IN_MACRO.count(text);
    if count == 0 {
        return text.to_string();
    }
    tracing::trace!("Found {} empty lines inside macros", count);
    EMPTY_LINE_IN_MACRO
        .replace_all(text, "${1} \n${2}${3}")
        .into_owned()
}
