//! 行级空白清理

use crate::tidy::matcher::TextMatcher;
use crate::tidy::rules::{
    EMPTY_LINE, LEADING_SPACES_AFTER_BREAK, LEADING_SPACES_AT_START, NUMBERING, TRAILING_SPACES,
};

/// 去掉行首编号
///
/// 例：`3. Heading` → `Heading`
pub fn strip_numbering(text: &str) -> String {
    NUMBERING.delete_all(text).into_owned()
}

/// 去掉换行前的水平空白
///
/// 换行符本身不变：`\r\n` 中的 `\r` 视为换行的一部分而保留
pub fn strip_trailing_spaces(text: &str) -> String {
    TRAILING_SPACES
        .replace_all_with(text, |caps| {
            if caps[0].ends_with("\r\n") {
                "\r\n".to_string()
            } else {
                "\n".to_string()
            }
        })
        .into_owned()
}

/// 去掉文本开头及每个换行后的水平空白
///
/// 紧跟 `\n` 的 `\r` 属于换行 `\r\n`，保留
pub fn strip_leading_spaces(text: &str) -> String {
    let text = LEADING_SPACES_AT_START
        .replace_all_with_following(text, |caps, rest| keep_crlf("", &caps[0], rest));
    LEADING_SPACES_AFTER_BREAK
        .replace_all_with_following(&text, |caps, rest| keep_crlf("\n", &caps[0], rest))
}

fn keep_crlf(prefix: &str, matched: &str, rest: &str) -> String {
    if matched.ends_with('\r') && rest.starts_with('\n') {
        format!("{}\r", prefix)
    } else {
        prefix.to_string()
    }
}

/// 删除所有空白行，并去掉首尾的换行符
pub fn remove_empty_lines(text: &str) -> String {
    let text = EMPTY_LINE.delete_all(text);
    text.trim_matches(&['\r', '\n'][..]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_numbering() {
        assert_eq!(strip_numbering("3. Heading"), "Heading");
        assert_eq!(strip_numbering("  12.   Intro\ntext"), "Intro\ntext");
        assert_eq!(strip_numbering("1. one\n\t2.two\n3 three"), "one\ntwo\n3 three");
    }

    #[test]
    fn test_strip_numbering_only_at_line_start() {
        assert_eq!(strip_numbering("chapter 3. begins"), "chapter 3. begins");
        assert_eq!(strip_numbering("v1.2"), "v1.2");
    }

    #[test]
    fn test_trailing_spaces_removed() {
        let input = "a \nb\t\t\t\nc     \n\n\nd\n\n\n\n\ne   \t \t\t\t \t \t\n\n\n\n\n\n";
        let want = "a\nb\nc\n\n\nd\n\n\n\n\ne\n\n\n\n\n\n";
        assert_eq!(strip_trailing_spaces(input), want);
    }

    #[test]
    fn test_trailing_spaces_keep_crlf() {
        assert_eq!(strip_trailing_spaces("a  \r\nb\r\n"), "a\r\nb\r\n");
        assert_eq!(strip_trailing_spaces("a \r \nb"), "a\nb");
    }

    #[test]
    fn test_trailing_spaces_not_at_line_end_untouched() {
        assert_eq!(strip_trailing_spaces("a  b  "), "a  b  ");
    }

    #[test]
    fn test_leading_spaces() {
        assert_eq!(strip_leading_spaces("   a "), "a ");
        assert_eq!(strip_leading_spaces("\t\ta\t"), "a\t");

        let input = "\n    <li>Services\\EntityService.cs</li>\n    <li>Services\\GameService.cs</li>\n\n";
        let want = "\n<li>Services\\EntityService.cs</li>\n<li>Services\\GameService.cs</li>\n\n";
        assert_eq!(strip_leading_spaces(input), want);

        let input = "\n\t<li>A</li>\n \t\t\t<li>B</li>\n <li>C</li>\n";
        let want = "\n<li>A</li>\n<li>B</li>\n<li>C</li>\n";
        assert_eq!(strip_leading_spaces(input), want);
    }

    #[test]
    fn test_leading_spaces_keep_crlf() {
        assert_eq!(strip_leading_spaces("a\n\r\nb"), "a\n\r\nb");
        assert_eq!(strip_leading_spaces("\r\nb"), "\r\nb");
        assert_eq!(strip_leading_spaces(" \t\r\nb"), "\r\nb");
        assert_eq!(strip_leading_spaces("a\r\n  \r\n\tb"), "a\r\n\r\nb");
        assert_eq!(strip_leading_spaces("a\n \rb"), "a\nb");
    }

    #[test]
    fn test_remove_empty_lines() {
        let input = "\\emph{\n \n\t\t\n\t\t\t}";
        assert_eq!(remove_empty_lines(input), "\\emph{\n\t\t\t}");
    }

    #[test]
    fn test_remove_empty_lines_trims_edges() {
        assert_eq!(remove_empty_lines("\n\n  \na\n\n\nb\n \n"), "a\nb");
        assert_eq!(remove_empty_lines("   "), "");
    }

    #[test]
    fn test_remove_empty_lines_idempotent_samples() {
        for s in ["a\n\n b\n\t\n", " \n x \n\n", "\r\n\r\na\r\n", "a"] {
            let once = remove_empty_lines(s);
            assert_eq!(remove_empty_lines(&once), once);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_numbering(""), "");
        assert_eq!(strip_trailing_spaces(""), "");
        assert_eq!(strip_leading_spaces(""), "");
        assert_eq!(remove_empty_lines(""), "");
    }
}
