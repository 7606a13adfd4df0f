use super::tests::{rebuild, Entry, Shelf};
use super::*;
use crate::matching::Matchable;
use proptest::prelude::*;

/// 小さなアルファベットで一致が起きやすい文字列
fn word_strategy() -> impl Strategy<Value = String> {
    "[abcde ]{0,10}".prop_map(|s| s)
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    proptest::collection::vec(word_strategy(), 1..3).prop_map(|strings| Entry { strings })
}

fn shelf_strategy() -> impl Strategy<Value = Shelf> {
    (word_strategy(), proptest::collection::vec(entry_strategy(), 0..5)).prop_map(
        |(label, entries)| Shelf {
            label: vec![label],
            entries,
        },
    )
}

fn shelves_strategy() -> impl Strategy<Value = Vec<Shelf>> {
    proptest::collection::vec(shelf_strategy(), 0..6)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[abcde]{1,4}".prop_map(|s| s)
}

proptest! {
    /// 空クエリは元のリストをそのまま返す
    #[test]
    fn prop_blank_query_is_identity(groups in shelves_strategy()) {
        let result = filter_groups(&groups, "", "", None, rebuild);
        prop_assert!(matches!(result, Cow::Borrowed(_)));
        prop_assert_eq!(result.as_ref(), groups.as_slice());
    }

    /// 結果の各グループは元のグループそのものか、一致する子だけを持つ部分集合
    #[test]
    fn prop_result_groups_are_sound(groups in shelves_strategy(), query in query_strategy()) {
        let result = filter_groups(&groups, &query, "", None, rebuild);

        for group in result.iter() {
            if groups.contains(group) && group.matches(&query) {
                continue;
            }
            prop_assert!(!group.entries.is_empty());
            prop_assert!(group.entries.iter().all(|e| e.matches(&query)));
            let origin = groups.iter().any(|g| {
                g.label == group.label && group.entries.iter().all(|e| g.entries.contains(e))
            });
            prop_assert!(origin);
        }
    }

    /// 同じクエリで絞り込み直しても結果は変わらない
    #[test]
    fn prop_refiltering_is_idempotent(groups in shelves_strategy(), query in query_strategy()) {
        let once = filter_groups(&groups, &query, "", None, rebuild).into_owned();
        let twice = filter_groups(&once, &query, "", None, rebuild).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// 直前の結果を使った絞り込みは、全体からの絞り込みと一致する
    #[test]
    fn prop_incremental_refinement_matches_full_search(
        groups in shelves_strategy(),
        query in query_strategy(),
        suffix in "[abcde]{0,3}"
    ) {
        let extended = format!("{query}{suffix}");

        let previous = filter_groups(&groups, &query, "", None, rebuild).into_owned();
        let incremental =
            filter_groups(&groups, &extended, &query, Some(&previous), rebuild).into_owned();
        let direct = filter_groups(&groups, &extended, "", None, rebuild).into_owned();

        prop_assert_eq!(incremental, direct);
    }
}
