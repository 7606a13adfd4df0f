use super::*;
use proptest::prelude::*;

/// カタログのタイトルに出てくるような文字列
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,24}".prop_map(|s| s)
}

proptest! {
    /// 文字列は常に自分自身に一致する
    #[test]
    fn prop_string_matches_itself(source in text_strategy()) {
        prop_assert!(fuzzy_matches(&source, &source));
    }

    /// 空クエリは常に一致する
    #[test]
    fn prop_empty_query_matches_everything(source in "\\PC{0,24}") {
        prop_assert!(fuzzy_matches(&source, ""));
    }

    /// 文字を間引いたクエリ（部分列）は一致する
    #[test]
    fn prop_subsequence_matches(
        source in text_strategy(),
        mask in proptest::collection::vec(any::<bool>(), 24)
    ) {
        let query: String = source
            .chars()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(c, _)| c)
            .collect();
        prop_assert!(fuzzy_matches(&source, &query));
    }

    /// クエリを伸ばすと一致しにくくなることはあっても、一致しやすくなることはない
    #[test]
    fn prop_extension_is_monotonic(
        source in text_strategy(),
        query in "[a-z]{0,6}",
        suffix in "[a-z]{0,3}"
    ) {
        let extended = format!("{query}{suffix}");
        if fuzzy_matches(&source, &extended) {
            prop_assert!(fuzzy_matches(&source, &query));
        }
    }

    /// 位置は一致判定と整合し、昇順で、該当文字を指す
    #[test]
    fn prop_positions_agree_with_matcher(
        source in text_strategy(),
        query in "[a-z ]{0,6}"
    ) {
        let positions = fuzzy_match_positions(&source, &query);
        prop_assert_eq!(positions.is_some(), fuzzy_matches(&source, &query));

        if let Some(positions) = positions {
            let chars: Vec<char> = source.chars().collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for (index, wanted) in positions.iter().zip(query.chars()) {
                prop_assert_eq!(chars[*index], wanted);
            }
        }
    }
}
