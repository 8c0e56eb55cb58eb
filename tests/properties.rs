use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use strdel::{deduplicate, remove_empty_lines, strip_trailing_spaces};

const LIST_VALUES: &[&str] = &["a", "b", "c", "d", ""];

fn text_from(alphabet: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(alphabet), 0..60)
        .prop_map(|parts| parts.concat())
}

fn line_breaks(s: &str) -> Vec<&'static str> {
    let bytes = s.as_bytes();
    let mut breaks = Vec::new();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            if i > 0 && bytes[i - 1] == b'\r' {
                breaks.push("\r\n");
            } else {
                breaks.push("\n");
            }
        }
    }
    breaks
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, max_shrink_iters: 200, .. ProptestConfig::default()
    })]

    #[test]
    fn remove_empty_lines_is_idempotent(s in text_from(&["a", "b", " ", "\t", "\n"])) {
        let once = remove_empty_lines(&s);
        prop_assert_eq!(remove_empty_lines(&once), once);
    }

    #[test]
    fn deduplicate_is_idempotent_and_ordered(
        items in proptest::collection::vec(proptest::sample::select(LIST_VALUES), 0..30)
    ) {
        let once = deduplicate(&items);
        prop_assert_eq!(deduplicate(&once), once.clone());

        // 无重复
        let mut sorted = once.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), once.len());

        // 顺序与首次出现顺序一致
        let first_seen: Vec<usize> = once
            .iter()
            .map(|v| items.iter().position(|i| *i == v.as_str()).unwrap())
            .collect();
        prop_assert!(first_seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn strip_trailing_spaces_keeps_line_breaks(
        s in text_from(&["x", " ", "\t", "\r", "\x0c", "\n", "\r\n"])
    ) {
        let out = strip_trailing_spaces(&s);
        prop_assert_eq!(line_breaks(&out), line_breaks(&s));
    }
}
